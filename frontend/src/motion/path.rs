use thiserror::Error;

/// Samples taken per segment when building the arc-length table.
const SAMPLES_PER_SEGMENT: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("path data is empty")]
    Empty,
    #[error("path data must start with a move command")]
    MissingMove,
    #[error("coordinates found before any command")]
    MissingCommand,
    #[error("unsupported path command `{0}`")]
    UnsupportedCommand(char),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("command `{command}` expects coordinates in groups of {group}")]
    Arity { command: char, group: usize },
    #[error("path has zero length")]
    Degenerate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

#[derive(Clone, Copy, Debug)]
enum Segment {
    Line(Point, Point),
    Cubic(Point, Point, Point, Point),
}

impl Segment {
    fn point(&self, t: f64) -> Point {
        match *self {
            Segment::Line(a, b) => a.lerp(b, t),
            Segment::Cubic(p0, p1, p2, p3) => {
                let mt = 1.0 - t;
                let a = mt * mt * mt;
                let b = 3.0 * mt * mt * t;
                let c = 3.0 * mt * t * t;
                let d = t * t * t;
                Point::new(
                    a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                    a * p0.y + b * p1.y + c * p2.y + d * p3.y,
                )
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Station {
    length: f64,
    point: Point,
}

/// A path that motion can follow at constant speed.
///
/// Built from absolute SVG path data (`M`, `L`, `C`, `Z`). Positions are
/// looked up by fraction of total arc length, so equal progress steps cover
/// equal distances regardless of how the curves are parameterised.
#[derive(Clone, Debug)]
pub struct MotionPath {
    stations: Vec<Station>,
}

impl MotionPath {
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let segments = parse_segments(data)?;
        let mut stations = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT + 1);
        let mut length = 0.0;
        let mut last = segments[0].point(0.0);
        stations.push(Station { length, point: last });
        for segment in &segments {
            for step in 1..=SAMPLES_PER_SEGMENT {
                let point = segment.point(step as f64 / SAMPLES_PER_SEGMENT as f64);
                length += last.distance(point);
                stations.push(Station { length, point });
                last = point;
            }
        }
        if length <= f64::EPSILON {
            return Err(PathError::Degenerate);
        }
        Ok(Self { stations })
    }

    pub fn length(&self) -> f64 {
        self.stations.last().map_or(0.0, |s| s.length)
    }

    /// Point at `progress` of the total length. Progress wraps, so `1.0` is
    /// back at the start of a closed path.
    pub fn point_at(&self, progress: f64) -> Point {
        let total = self.length();
        let target = progress.rem_euclid(1.0) * total;
        let idx = self.stations.partition_point(|s| s.length < target);
        if idx == 0 {
            return self.stations[0].point;
        }
        let Some(after) = self.stations.get(idx) else {
            return self.stations[self.stations.len() - 1].point;
        };
        let before = self.stations[idx - 1];
        let span = after.length - before.length;
        if span <= f64::EPSILON {
            return after.point;
        }
        before.point.lerp(after.point, (target - before.length) / span)
    }
}

fn tokenize(data: &str) -> Result<Vec<Token>, PathError> {
    fn flush(buf: &mut String, tokens: &mut Vec<Token>) -> Result<(), PathError> {
        if buf.is_empty() {
            return Ok(());
        }
        let value = buf
            .parse::<f64>()
            .map_err(|_| PathError::InvalidNumber(buf.clone()))?;
        tokens.push(Token::Number(value));
        buf.clear();
        Ok(())
    }

    let mut tokens = Vec::new();
    let mut buf = String::new();
    for c in data.chars() {
        if c.is_ascii_alphabetic() && c != 'e' && c != 'E' {
            flush(&mut buf, &mut tokens)?;
            tokens.push(Token::Command(c));
        } else if c.is_whitespace() || c == ',' {
            flush(&mut buf, &mut tokens)?;
        } else {
            // Packed forms: `10-20` is two numbers, so is `.5.5`.
            let starts_number = match c {
                '-' | '+' => !buf.is_empty() && !buf.ends_with(|p: char| p == 'e' || p == 'E'),
                '.' => buf.contains('.') && !buf.contains(|p: char| p == 'e' || p == 'E'),
                _ => false,
            };
            if starts_number {
                flush(&mut buf, &mut tokens)?;
            }
            buf.push(c);
        }
    }
    flush(&mut buf, &mut tokens)?;
    Ok(tokens)
}

fn parse_segments(data: &str) -> Result<Vec<Segment>, PathError> {
    let tokens = tokenize(data)?;
    if tokens.is_empty() {
        return Err(PathError::Empty);
    }

    let mut segments = Vec::new();
    let mut cursor: Option<Point> = None;
    let mut start = Point::new(0.0, 0.0);
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let Token::Command(command) = token else {
            return Err(PathError::MissingCommand);
        };
        let mut args = Vec::new();
        while let Some(&Token::Number(value)) = iter.peek() {
            args.push(value);
            iter.next();
        }

        match command {
            'M' => {
                if args.is_empty() || args.len() % 2 != 0 {
                    return Err(PathError::Arity { command, group: 2 });
                }
                let origin = Point::new(args[0], args[1]);
                start = origin;
                let mut at = origin;
                for pair in args[2..].chunks_exact(2) {
                    let next = Point::new(pair[0], pair[1]);
                    segments.push(Segment::Line(at, next));
                    at = next;
                }
                cursor = Some(at);
            }
            'L' => {
                let mut at = cursor.ok_or(PathError::MissingMove)?;
                if args.is_empty() || args.len() % 2 != 0 {
                    return Err(PathError::Arity { command, group: 2 });
                }
                for pair in args.chunks_exact(2) {
                    let next = Point::new(pair[0], pair[1]);
                    segments.push(Segment::Line(at, next));
                    at = next;
                }
                cursor = Some(at);
            }
            'C' => {
                let mut at = cursor.ok_or(PathError::MissingMove)?;
                if args.is_empty() || args.len() % 6 != 0 {
                    return Err(PathError::Arity { command, group: 6 });
                }
                for group in args.chunks_exact(6) {
                    let end = Point::new(group[4], group[5]);
                    segments.push(Segment::Cubic(
                        at,
                        Point::new(group[0], group[1]),
                        Point::new(group[2], group[3]),
                        end,
                    ));
                    at = end;
                }
                cursor = Some(at);
            }
            'Z' | 'z' => {
                let at = cursor.ok_or(PathError::MissingMove)?;
                if !args.is_empty() {
                    return Err(PathError::Arity { command, group: 0 });
                }
                if at != start {
                    segments.push(Segment::Line(at, start));
                }
                cursor = Some(start);
            }
            other => return Err(PathError::UnsupportedCommand(other)),
        }
    }

    if segments.is_empty() {
        return Err(PathError::Degenerate);
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ORBIT_PATH_DATA;

    fn assert_near(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-6,
            "expected {expected:?} got {actual:?}"
        );
    }

    #[test]
    fn orbit_starts_and_wraps_at_the_top() {
        let path = MotionPath::parse(ORBIT_PATH_DATA).unwrap();
        assert_near(path.point_at(0.0), Point::new(300.0, 50.0));
        assert_near(path.point_at(1.0), Point::new(300.0, 50.0));
        assert_near(path.point_at(-0.75), path.point_at(0.25));
    }

    #[test]
    fn symmetric_orbit_quarters_land_on_the_axes() {
        let path = MotionPath::parse(ORBIT_PATH_DATA).unwrap();
        assert_near(path.point_at(0.25), Point::new(550.0, 300.0));
        assert_near(path.point_at(0.5), Point::new(300.0, 550.0));
        assert_near(path.point_at(0.75), Point::new(50.0, 300.0));
    }

    #[test]
    fn line_progress_is_distance_based() {
        let path = MotionPath::parse("M 0 0 L 10 0 L 10 30").unwrap();
        assert!((path.length() - 40.0).abs() < 1e-9);
        assert_near(path.point_at(0.125), Point::new(5.0, 0.0));
        assert_near(path.point_at(0.5), Point::new(10.0, 10.0));
    }

    #[test]
    fn close_adds_a_return_line() {
        let path = MotionPath::parse("M0,0 L10,0 L10,10 Z").unwrap();
        assert!((path.length() - (20.0 + 200f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn packed_numbers_are_split() {
        let path = MotionPath::parse("M10-20L.5.5").unwrap();
        assert!((path.length() - 510.5f64.sqrt()).abs() < 1e-9);
        assert_near(path.point_at(0.5), Point::new(5.25, -9.75));

        let path = MotionPath::parse("M0,0L1e1-2e0").unwrap();
        assert_near(path.point_at(0.5), Point::new(5.0, -1.0));
    }

    #[test]
    fn rejects_malformed_data() {
        assert_eq!(MotionPath::parse("").unwrap_err(), PathError::Empty);
        assert_eq!(MotionPath::parse("L 1 1").unwrap_err(), PathError::MissingMove);
        assert_eq!(MotionPath::parse("1 2 M 0 0").unwrap_err(), PathError::MissingCommand);
        assert_eq!(
            MotionPath::parse("M 0 0 Q 1 1 2 2").unwrap_err(),
            PathError::UnsupportedCommand('Q')
        );
        assert_eq!(
            MotionPath::parse("M 0 0 C 1 1 2").unwrap_err(),
            PathError::Arity { command: 'C', group: 6 }
        );
        assert_eq!(
            MotionPath::parse("M 0 0 L 1e 2").unwrap_err(),
            PathError::InvalidNumber("1e".to_string())
        );
        assert_eq!(MotionPath::parse("M 5 5 Z").unwrap_err(), PathError::Degenerate);
    }
}
