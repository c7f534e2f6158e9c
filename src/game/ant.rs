use super::constants::{ANIMATION_FRAMES, START_SPEED, TURN_RATE};
use super::math::{clamp, distance, wrap_angle};
use super::types::{Ant, Food, Point};
use std::f64::consts::{PI, TAU};

pub fn create_ant(position: Point, size: f64) -> Ant {
    Ant {
        position,
        speed: START_SPEED,
        direction: 0.0,
        target: None,
        frame_index: 1,
        size,
    }
}

pub fn choose_food(ant: &mut Ant, food: &[Food]) {
    let mut nearest: Option<(u32, f64)> = None;
    for item in food {
        let dist = distance(ant.position, item.position);
        match nearest {
            Some((_, best)) if dist >= best => {}
            _ => nearest = Some((item.id, dist)),
        }
    }
    ant.target = nearest.map(|(id, _)| id);
}

pub fn advance(ant: &mut Ant, target: Point) {
    let theta = (target.y - ant.position.y).atan2(target.x - ant.position.x);
    let direction = wrap_angle(ant.direction);

    let mut turn = theta - direction;
    if turn > PI {
        turn -= TAU;
    }
    if turn < -PI {
        turn += TAU;
    }

    let max_turn = ant.speed * TURN_RATE;
    let turn = clamp(turn, -max_turn, max_turn);

    ant.direction = direction + turn;
    ant.frame_index = (ant.frame_index + 1) % ANIMATION_FRAMES;
    ant.position.x += ant.direction.cos() * ant.speed;
    ant.position.y += ant.direction.sin() * ant.speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::f64::consts::FRAC_PI_2;

    fn make_ant(x: f64, y: f64) -> Ant {
        create_ant(Point { x, y }, 54.0)
    }

    fn make_food(id: u32, x: f64, y: f64) -> Food {
        Food {
            id,
            position: Point { x, y },
            variant: 0,
        }
    }

    #[test]
    fn choose_food_picks_nearest_item() {
        let mut ant = make_ant(400.0, 300.0);
        let food = vec![
            make_food(1, 700.0, 500.0),
            make_food(2, 420.0, 310.0),
            make_food(3, 100.0, 100.0),
        ];

        choose_food(&mut ant, &food);

        assert_eq!(ant.target, Some(2));
    }

    #[test]
    fn choose_food_breaks_ties_toward_first_item() {
        let mut ant = make_ant(400.0, 300.0);
        let food = vec![
            make_food(7, 400.0, 200.0),
            make_food(8, 400.0, 400.0),
            make_food(9, 500.0, 300.0),
        ];

        choose_food(&mut ant, &food);

        assert_eq!(ant.target, Some(7));
    }

    #[test]
    fn choose_food_clears_target_when_no_food_exists() {
        let mut ant = make_ant(400.0, 300.0);
        ant.target = Some(42);

        choose_food(&mut ant, &[]);

        assert_eq!(ant.target, None);
    }

    #[test]
    fn first_turn_toward_side_target_is_clamped() {
        let mut ant = make_ant(400.0, 300.0);
        let target = Point { x: 400.0, y: 200.0 };

        advance(&mut ant, target);

        let expected_turn = -START_SPEED * TURN_RATE;
        assert!((ant.direction - expected_turn).abs() < 1e-12);
        let expected_x = 400.0 + expected_turn.cos() * START_SPEED;
        let expected_y = 300.0 + expected_turn.sin() * START_SPEED;
        assert!((ant.position.x - expected_x).abs() < 1e-9);
        assert!((ant.position.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn aligned_ant_advances_straight_to_target() {
        let mut ant = make_ant(400.0, 300.0);
        ant.direction = -FRAC_PI_2;
        let target = Point { x: 400.0, y: 200.0 };

        advance(&mut ant, target);

        assert!((ant.direction + FRAC_PI_2).abs() < 1e-12);
        assert!((ant.position.x - 400.0).abs() < 1e-9);
        assert!((ant.position.y - 295.0).abs() < 1e-9);
    }

    #[test]
    fn turn_never_exceeds_max_rotation() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let mut ant = make_ant(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
            ant.direction = rng.gen_range(-10.0..10.0);
            ant.speed = rng.gen_range(1.0..12.0);
            let target = Point {
                x: rng.gen_range(0.0..800.0),
                y: rng.gen_range(0.0..600.0),
            };

            let heading_before = wrap_angle(ant.direction);
            advance(&mut ant, target);

            let turn = ant.direction - heading_before;
            assert!(turn.abs() <= ant.speed * TURN_RATE + 1e-9);
        }
    }

    #[test]
    fn unwrapped_heading_is_normalized_before_turning() {
        let mut ant = make_ant(400.0, 300.0);
        ant.direction = 5.0 * TAU + 0.1;
        let target = Point { x: 500.0, y: 300.0 };

        advance(&mut ant, target);

        assert!(ant.direction.abs() <= 0.1 + 1e-9);
        assert!(ant.direction < 0.1);
    }

    #[test]
    fn animation_frame_cycles_through_three_frames() {
        let mut ant = make_ant(400.0, 300.0);
        assert_eq!(ant.frame_index, 1);
        let target = Point { x: 600.0, y: 300.0 };

        advance(&mut ant, target);
        assert_eq!(ant.frame_index, 2);
        advance(&mut ant, target);
        assert_eq!(ant.frame_index, 0);
        advance(&mut ant, target);
        assert_eq!(ant.frame_index, 1);
    }
}
