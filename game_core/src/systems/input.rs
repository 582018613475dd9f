use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn the held keys into a movement intent for each paddle
pub fn ingest_inputs(world: &mut World, controls: &Controls) {
    for (_entity, (side, intent)) in world.query_mut::<(&Side, &mut PaddleIntent)>() {
        intent.dir = controls.direction(*side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_inputs_set_intents_per_side() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, Paddle::spawn(Side::Left, &config));
        let right = create_paddle(&mut world, Side::Right, Paddle::spawn(Side::Right, &config));

        let controls = Controls::new().with(Key::LeftDown).with(Key::RightUp);
        ingest_inputs(&mut world, &controls);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, -1);

        ingest_inputs(&mut world, &Controls::new());
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 0);
    }
}
