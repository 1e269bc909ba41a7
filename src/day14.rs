use anyhow::{bail, Result};
use log::debug;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Room {width: i64, height: i64}

impl Room {
    const EXAMPLE: Room = Room {width: 11, height: 7};
    const FULL: Room = Room {width: 101, height: 103};

    /// The example robots all start inside the small room; real inputs spread over the full one.
    fn for_robots(robots: &[Robot]) -> Room {
        let example = Room::EXAMPLE;
        if robots.iter().all(|robot| robot.pos.0 < example.width && robot.pos.1 < example.height) {
            example
        } else {
            Room::FULL
        }
    }

    fn quadrant(&self, (x, y): (i64, i64)) -> Option<usize> {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        if x == mid_x || y == mid_y {return None}
        Some(usize::from(x > mid_x) + 2 * usize::from(y > mid_y))
    }

    fn safety_factor(&self, positions: impl Iterator<Item = (i64, i64)>) -> usize {
        let mut quadrants = [0; 4];
        for pos in positions {
            if let Some(quadrant) = self.quadrant(pos) {quadrants[quadrant] += 1}
        }
        quadrants.iter().product()
    }

    fn render(&self, positions: impl Iterator<Item = (i64, i64)>) -> String {
        let mut rows = vec![vec![b' '; self.width as usize]; self.height as usize];
        for (x, y) in positions {rows[y as usize][x as usize] = b'#'}
        rows.iter().map(|row| String::from_utf8_lossy(row).into_owned()).collect::<Vec<_>>().join("\n")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Robot {pos: (i64, i64), vel: (i64, i64)}

impl Robot {
    fn after(&self, seconds: i64, room: Room) -> (i64, i64) {
        (
            (self.pos.0 + seconds * self.vel.0).rem_euclid(room.width),
            (self.pos.1 + seconds * self.vel.1).rem_euclid(room.height),
        )
    }
}

fn robots(input: &str) -> Result<Vec<Robot>> {
    let pattern = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$")?;
    input.trim().lines().enumerate().map(|(li, line)| -> Result<Robot> {
        let Some(m) = pattern.captures(line.trim()) else {
            bail!("line {}: expected p=x,y v=dx,dy, found {:?}", li + 1, line);
        };
        Ok(Robot {pos: (m[1].parse()?, m[2].parse()?), vel: (m[3].parse()?, m[4].parse()?)})
    }).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = robots(input)?;
    let room = Room::for_robots(&robots);
    debug!("{} robots in a {}x{} room", robots.len(), room.width, room.height);

    if part == 1 {
        Ok(room.safety_factor(robots.iter().map(|robot| robot.after(100, room))).to_string())
    } else {
        // positions repeat after width * height seconds
        let picture = (0 .. room.width * room.height)
            .min_by_key(|&seconds| room.safety_factor(robots.iter().map(|robot| robot.after(seconds, room))))
            .unwrap_or(0);
        debug!("after {} seconds:\n{}", picture, room.render(robots.iter().map(|robot| robot.after(picture, room))));
        Ok(picture.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn teleports_around_the_edges() {
        let robot = Robot {pos: (2, 4), vel: (2, -3)};
        assert_eq!(robot.after(1, Room::EXAMPLE), (4, 1));
        assert_eq!(robot.after(2, Room::EXAMPLE), (6, 5));
        assert_eq!(robot.after(5, Room::EXAMPLE), (1, 3));
    }

    #[test]
    fn room_size_follows_the_robots() {
        assert_eq!(Room::for_robots(&robots(EXAMPLE).unwrap()), Room::EXAMPLE);
        assert_eq!(Room::for_robots(&robots("p=50,80 v=1,1").unwrap()), Room::FULL);
    }

    #[test]
    fn middle_lines_belong_to_no_quadrant() {
        assert_eq!(Room::EXAMPLE.quadrant((5, 0)), None);
        assert_eq!(Room::EXAMPLE.quadrant((0, 3)), None);
        assert_eq!(Room::EXAMPLE.quadrant((6, 4)), Some(3));
        assert_eq!(Room::EXAMPLE.quadrant((4, 2)), Some(0));
    }

    #[test]
    fn picture_is_the_first_least_safe_frame() {
        // the last robot reaches the middle column after 5 seconds, emptying a quadrant
        let input = "p=0,0 v=0,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=-1,0";
        assert_eq!(solve(2, input).unwrap(), "5");
    }

    #[test]
    fn rejects_garbled_robots() {
        assert!(solve(1, "p=0,4 v=3").is_err());
    }
}
