//! Object recycling for infinite scroll
//!
//! Every frame, objects that drift more than `view_buffer` from the vehicle
//! are teleported to the opposite side into a band just inside the buffer
//! edge. This skips the full rejection sampling pass on purpose: O(n) with
//! no retries, at the cost of occasional overlaps after a recycle.

use rand::Rng;

use super::state::World;
use crate::consts::{RECYCLE_BAND, RECYCLE_SPREAD, ROAD_MARGIN, ROAD_NUDGE};

impl World {
    /// Relocate every object further than `view_buffer` from `car_y`
    ///
    /// Runs over the whole pool unconditionally and never changes the
    /// collection length. Objects still in range are untouched.
    pub fn update(&mut self, car_y: f32) {
        let view_buffer = self.config.view_buffer;
        let road_x = self.road_x;
        let road_right = self.road_x + self.road_width;
        let mut recycled = 0u32;

        for obj in &mut self.objects {
            let dy = obj.pos.y - car_y;
            if dy.abs() <= view_buffer {
                continue;
            }

            // Fell out behind: respawn ahead, and vice versa.
            let sign = if dy > 0.0 { -1.0 } else { 1.0 };
            obj.pos.y = car_y
                + sign * (view_buffer - RECYCLE_BAND + self.rng.random::<f32>() * RECYCLE_BAND);

            // New x anchored to the corridor with a wide spread, pushed off
            // the road if it lands inside the clearance margin.
            obj.pos.x = road_x + (self.rng.random::<f32>() - 0.5) * RECYCLE_SPREAD;
            if obj.pos.x > road_x - ROAD_MARGIN && obj.pos.x < road_right + ROAD_MARGIN {
                obj.pos.x += ROAD_NUDGE;
            }
            recycled += 1;
        }

        if recycled > 0 {
            log::trace!("recycled {recycled} objects around y={car_y}");
        }
    }
}
