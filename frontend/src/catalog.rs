/// A bookable service shown on the category grid and the detail page.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub animation_source: &'static str,
}

static SERVICES: [ServiceDescriptor; 8] = [
    ServiceDescriptor {
        key: "home-cleaning",
        name: "Home Cleaning",
        animation_source: "https://assets2.lottiefiles.com/packages/lf20_bhdsmd4n.json",
    },
    ServiceDescriptor {
        key: "car-washing",
        name: "Car Washing",
        animation_source: "https://assets5.lottiefiles.com/private_files/lf30_gnifxq6a.json",
    },
    ServiceDescriptor {
        key: "food-delivery",
        name: "Food Delivery",
        animation_source: "https://assets10.lottiefiles.com/packages/lf20_dyq7c7.json",
    },
    ServiceDescriptor {
        key: "doctor-appointment",
        name: "Doctor Appointment",
        animation_source: "https://assets7.lottiefiles.com/packages/lf20_8xwzst.json",
    },
    ServiceDescriptor {
        key: "salon-booking",
        name: "Salon Booking",
        animation_source: "https://assets1.lottiefiles.com/packages/lf20_mrcyvb.json",
    },
    ServiceDescriptor {
        key: "sports",
        name: "Sports",
        animation_source: "https://assets2.lottiefiles.com/packages/lf20_vfnp3v.json",
    },
    ServiceDescriptor {
        key: "events",
        name: "Events",
        animation_source: "https://assets4.lottiefiles.com/packages/lf20_rhnmhzwv.json",
    },
    ServiceDescriptor {
        key: "electrician",
        name: "Electrician",
        animation_source: "https://assets1.lottiefiles.com/packages/lf20_5w6qj3.json",
    },
];

pub fn list() -> &'static [ServiceDescriptor] {
    &SERVICES
}

/// Looks up a service by key. Unknown keys get the first entry.
pub fn find(key: &str) -> &'static ServiceDescriptor {
    SERVICES
        .iter()
        .find(|service| service.key == key)
        .unwrap_or(&SERVICES[0])
}

pub fn contains(key: &str) -> bool {
    SERVICES.iter().any(|service| service.key == key)
}

/// The first `count` services, in catalog order.
pub fn featured(count: usize) -> &'static [ServiceDescriptor] {
    &SERVICES[..count.min(SERVICES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = list().iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), list().len());
    }

    #[test]
    fn find_returns_exact_match_for_every_key() {
        for service in list() {
            assert_eq!(find(service.key).key, service.key);
            assert!(contains(service.key));
        }
    }

    #[test]
    fn unknown_key_falls_back_to_first_entry() {
        assert_eq!(find("nonexistent").key, "home-cleaning");
        assert_eq!(find("").key, "home-cleaning");
        assert!(!contains("nonexistent"));
    }

    #[test]
    fn car_washing_is_found_by_key() {
        assert_eq!(find("car-washing").name, "Car Washing");
    }

    #[test]
    fn list_is_ordered_and_restartable() {
        let first: Vec<_> = list().iter().map(|s| s.key).collect();
        let second: Vec<_> = list().iter().map(|s| s.key).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "home-cleaning");
        assert_eq!(first[7], "electrician");
    }

    #[test]
    fn featured_is_clamped_to_catalog_size() {
        assert_eq!(featured(3).len(), 3);
        assert_eq!(featured(50).len(), list().len());
    }
}
