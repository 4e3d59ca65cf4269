//! Clock hand geometry. A [`TimeOfDay`] becomes a clock angle (radians,
//! clockwise from 12 o'clock), the angle becomes a point on the unit circle,
//! and a [`Face`] scales and translates that point into screen space, where
//! the origin is the top-left corner and Y grows downward.

use crate::time::TimeOfDay;
use serde::Deserialize;
use std::f64::consts::PI;

/// A 2D coordinate. Equality is exact on both components.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

// The `π / (n / k)` form keeps the cardinal angles exact: 0 at k = 0 (the
// division yields infinity) and π at k = n / 2.

/// The second hand's angle in radians, clockwise from 12 o'clock.
pub fn seconds_in_radians(t: TimeOfDay) -> f64 {
    PI / (30.0 / f64::from(t.second()))
}

/// The minute hand's angle, including the drift contributed by the
/// seconds.
pub fn minutes_in_radians(t: TimeOfDay) -> f64 {
    seconds_in_radians(t) / 60.0 + PI / (30.0 / f64::from(t.minute()))
}

/// The hour hand's angle on a 12 hour dial, including the drift contributed
/// by the minutes.
pub fn hours_in_radians(t: TimeOfDay) -> f64 {
    minutes_in_radians(t) / 12.0 + PI / (6.0 / f64::from(t.hour() % 12))
}

/// Maps a clock angle onto the unit circle with Y pointing up. Clock angles
/// start at north and run clockwise, so sine and cosine swap roles relative
/// to the usual east/counter-clockwise convention.
pub fn angle_to_point(angle: f64) -> Point {
    Point {
        x: angle.sin(),
        y: angle.cos(),
    }
}

pub fn second_hand_point(t: TimeOfDay) -> Point {
    angle_to_point(seconds_in_radians(t))
}

pub fn minute_hand_point(t: TimeOfDay) -> Point {
    angle_to_point(minutes_in_radians(t))
}

pub fn hour_hand_point(t: TimeOfDay) -> Point {
    angle_to_point(hours_in_radians(t))
}

/// The second hand's endpoint on the default [`Face`].
pub fn second_hand(t: TimeOfDay) -> Point {
    Face::default().second_hand(t)
}

/// Where and how large a clock is drawn in screen space.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Face {
    /// The centre of the dial.
    pub centre: Point,

    /// The radius of the dial's outline.
    pub bezel_radius: f64,

    pub second_hand_length: f64,
    pub minute_hand_length: f64,
    pub hour_hand_length: f64,
}

impl Default for Face {
    fn default() -> Self {
        Face {
            centre: Point::new(150.0, 150.0),
            bezel_radius: 100.0,
            second_hand_length: 90.0,
            minute_hand_length: 80.0,
            hour_hand_length: 50.0,
        }
    }
}

impl Face {
    pub fn second_hand(&self, t: TimeOfDay) -> Point {
        self.to_screen(second_hand_point(t), self.second_hand_length)
    }

    pub fn minute_hand(&self, t: TimeOfDay) -> Point {
        self.to_screen(minute_hand_point(t), self.minute_hand_length)
    }

    pub fn hour_hand(&self, t: TimeOfDay) -> Point {
        self.to_screen(hour_hand_point(t), self.hour_hand_length)
    }

    /// Scales a unit point by `length`, flips Y for screen space, and
    /// translates it onto the centre.
    fn to_screen(&self, unit: Point, length: f64) -> Point {
        Point {
            x: unit.x * length + self.centre.x,
            y: -unit.y * length + self.centre.y,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn simple_time(hours: u32, minutes: u32, seconds: u32) -> TimeOfDay {
        TimeOfDay::from_hms_opt(hours, minutes, seconds).unwrap()
    }

    fn roughly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn roughly_equal_point(a: Point, b: Point) -> bool {
        roughly_equal(a.x, b.x) && roughly_equal(a.y, b.y)
    }

    #[test]
    fn test_seconds_in_radians() {
        let cases = [
            (simple_time(0, 0, 30), PI),
            (simple_time(0, 0, 0), 0.0),
            (simple_time(0, 0, 45), (PI / 2.0) * 3.0),
            (simple_time(0, 0, 7), (PI / 30.0) * 7.0),
        ];
        for (t, angle) in cases.iter() {
            assert!(
                roughly_equal(seconds_in_radians(*t), *angle),
                "{}: wanted {} radians, got {}",
                t,
                angle,
                seconds_in_radians(*t)
            );
        }
    }

    #[test]
    fn test_seconds_in_radians_cardinals_are_exact() {
        assert_eq!(0.0, seconds_in_radians(simple_time(0, 0, 0)));
        assert_eq!(PI, seconds_in_radians(simple_time(0, 0, 30)));
    }

    #[test]
    fn test_seconds_in_radians_linear_over_every_second() {
        for s in 0..60 {
            let t = simple_time(12, 34, s);
            assert!(roughly_equal(seconds_in_radians(t), f64::from(s) * (PI / 30.0)));
        }
    }

    #[test]
    fn test_last_second_is_not_the_first() {
        let last = seconds_in_radians(simple_time(0, 0, 59));
        assert!(roughly_equal(last, 59.0 * PI / 30.0));
        assert!(!roughly_equal(last, seconds_in_radians(simple_time(0, 0, 0))));
        assert_ne!(
            second_hand_point(simple_time(0, 0, 59)),
            second_hand_point(simple_time(0, 0, 0))
        );
    }

    #[test]
    fn test_minutes_in_radians() {
        let cases = [
            (simple_time(0, 30, 0), PI),
            (simple_time(0, 0, 7), 7.0 * (PI / (30.0 * 60.0))),
        ];
        for (t, angle) in cases.iter() {
            assert!(roughly_equal(minutes_in_radians(*t), *angle), "{}", t);
        }
    }

    #[test]
    fn test_hours_in_radians() {
        let cases = [
            (simple_time(6, 0, 0), PI),
            (simple_time(0, 0, 0), 0.0),
            (simple_time(21, 0, 0), PI * 1.5),
            (simple_time(0, 1, 30), PI / ((6.0 * 60.0 * 60.0) / 90.0)),
        ];
        for (t, angle) in cases.iter() {
            assert!(roughly_equal(hours_in_radians(*t), *angle), "{}", t);
        }
    }

    #[test]
    fn test_second_hand_point() {
        let cases = [
            (simple_time(0, 0, 0), Point::new(0.0, 1.0)),
            (simple_time(0, 0, 30), Point::new(0.0, -1.0)),
            (simple_time(0, 0, 45), Point::new(-1.0, 0.0)),
        ];
        for (t, point) in cases.iter() {
            let got = second_hand_point(*t);
            assert!(
                roughly_equal_point(got, *point),
                "{}: wanted {:?}, got {:?}",
                t,
                point,
                got
            );
        }
    }

    #[test]
    fn test_hand_points_lie_on_unit_circle() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in 0..60 {
                    let t = simple_time(h, m, s);
                    let points = [
                        second_hand_point(t),
                        minute_hand_point(t),
                        hour_hand_point(t),
                    ];
                    for p in points.iter() {
                        assert!(roughly_equal(p.x * p.x + p.y * p.y, 1.0), "{}", t);
                    }
                }
            }
        }
    }

    #[test]
    fn test_second_hand_at_midnight() {
        let want = Point::new(150.0, 150.0 - 90.0);
        assert_eq!(want, second_hand(TimeOfDay::midnight()));
    }

    #[test]
    fn test_second_hand_at_30_seconds() {
        let got = second_hand(simple_time(0, 0, 30));
        assert!(roughly_equal_point(got, Point::new(150.0, 150.0 + 90.0)));
    }

    #[test]
    fn test_custom_face() {
        let face = Face {
            centre: Point::new(10.0, 20.0),
            second_hand_length: 5.0,
            minute_hand_length: 4.0,
            ..Face::default()
        };
        assert_eq!(Point::new(10.0, 15.0), face.second_hand(TimeOfDay::midnight()));
        assert!(roughly_equal_point(
            face.minute_hand(simple_time(0, 15, 0)),
            Point::new(14.0, 20.0)
        ));
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let t = simple_time(13, 47, 23);
        assert_eq!(seconds_in_radians(t).to_bits(), seconds_in_radians(t).to_bits());
        assert_eq!(second_hand_point(t), second_hand_point(t));
        assert_eq!(second_hand(t), second_hand(t));
        assert_eq!(Face::default().hour_hand(t), Face::default().hour_hand(t));
    }
}
