use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    block::{Block, Instance},
    config::SandboxConfig,
    data::{block::BlockType, registry::BlockRegistry},
    event::{Message, MessageQueue, SlotChangedMessage},
    input::InputEvent,
    math::ray::RayCollision,
    state::{
        inventory::{Inventory, InventoryError},
        player::Player,
        world::World,
    },
    util::tick_clock::TickClock,
};

#[derive(Debug, Clone, PartialEq)]
pub enum BreakOutcome {
    /// Nothing in view
    Missed,
    /// The block is gone from the world whether or not the inventory took it
    Broken {
        block: Block,
        deposit: Result<usize, InventoryError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOutcome {
    /// Nothing in view
    Missed,
    /// The block is in the world whether or not anything could be withdrawn for it
    Placed {
        target: Block,
        placed: Block,
        withdrawal: Result<usize, InventoryError>,
    },
}

/// Holds state information about the game independent of the rendering
#[derive(Debug)]
pub struct GameState {
    pub player: Player,
    pub world: World,
    pub inventory: Inventory,
    pub registry: BlockRegistry,
    pub messages: MessageQueue,
    clock: TickClock,
}

impl GameState {
    /// Start a new game with freshly generated terrain
    pub fn new(config: &SandboxConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let world = World::generate_flat(config.world_half_extent, &mut rng);

        Self::with_world(config, world)
    }

    /// Start a new game in an existing world
    pub fn with_world(config: &SandboxConfig, world: World) -> Self {
        Self {
            player: Player::new(config.start_pos, config.kinematics.clone()),
            world,
            inventory: Inventory::new(),
            registry: BlockRegistry::new(),
            messages: MessageQueue::new(),
            clock: TickClock::new(config.tick_period),
        }
    }

    /// Handle a single input event to completion
    pub fn handle_input(&mut self, event: InputEvent) {
        log::trace!("Input: {event:?}");

        match event {
            InputEvent::Move(direction) => {
                self.player
                    .controller
                    .step(direction, &mut self.player.camera);
                self.messages
                    .send(Message::PlayerMoved(self.player.camera.pos));
            }
            InputEvent::Jump => self.player.controller.jump(),
            InputEvent::Break => {
                self.break_block();
            }
            InputEvent::Place => {
                self.place_block();
            }
            InputEvent::Look(dx, dy) => self
                .player
                .controller
                .look((dx, dy), &mut self.player.camera),
        }
    }

    /// Update the world by a single gravity tick
    pub fn tick(&mut self) {
        let before = self.player.camera.pos;
        self.player.controller.tick(&mut self.player.camera);

        if self.player.camera.pos != before {
            self.messages
                .send(Message::PlayerMoved(self.player.camera.pos));
        }
    }

    /// Run however many gravity ticks fit into the elapsed time. Returns the number run.
    pub fn advance(&mut self, duration: &Duration) -> u32 {
        let ticks = self.clock.advance(duration);
        (0..ticks).for_each(|_| self.tick());
        ticks
    }

    pub fn until_next_tick(&self) -> Duration {
        self.clock.until_next_tick()
    }

    /// Get the block that the player is looking at
    pub fn get_player_target_block(&self) -> Option<(Block, RayCollision)> {
        self.world.cast_ray(&self.player.camera.ray())
    }

    /// Break the block the player is looking at and collect it
    pub fn break_block(&mut self) -> BreakOutcome {
        // Break action needs a target
        let Some((target, _)) = self.get_player_target_block() else {
            return BreakOutcome::Missed;
        };

        // Removal is committed before the inventory is touched and is never undone
        self.world.remove_block(&target.block_pos);
        self.messages.send(Message::BlockBroken(target));

        let deposit = self.inventory.deposit(target.block_type);
        match deposit {
            Ok(slot) => self.notify_slot(slot),
            Err(e) => log::debug!("Discarding broken {:?}: {e}", target.block_type),
        }

        log::debug!("Broke {target:?}, deposit: {deposit:?}");
        BreakOutcome::Broken {
            block: target,
            deposit,
        }
    }

    /// Place a block on top of the block the player is looking at
    pub fn place_block(&mut self) -> PlaceOutcome {
        let Some((target, _)) = self.get_player_target_block() else {
            return PlaceOutcome::Missed;
        };

        // Always directly on top, no matter which face was looked at.
        // The type comes from whether we have anything at all, not from the slot used.
        let block_type = if self.inventory.has_any() {
            BlockType::Dirt
        } else {
            BlockType::Stone
        };
        let placed = self.world.add_block(target.block_pos.above(), block_type);
        self.messages.send(Message::BlockPlaced(placed));

        // Placement stands even if there was nothing to take
        let withdrawal = self.inventory.withdraw();
        match withdrawal {
            Ok(slot) => self.notify_slot(slot),
            Err(e) => log::debug!("Placed {block_type:?} without withdrawing: {e}"),
        }

        log::debug!("Placed {placed:?} on {target:?}, withdrawal: {withdrawal:?}");
        PlaceOutcome::Placed {
            target,
            placed,
            withdrawal,
        }
    }

    fn notify_slot(&mut self, slot: usize) {
        if let Some(count) = self.inventory.count(slot) {
            self.messages
                .send(Message::SlotChanged(SlotChangedMessage { slot, count }));
        }
    }

    /// Everything the renderer needs to draw the world this frame
    pub fn instances(&self) -> Vec<Instance> {
        self.world
            .blocks()
            .map(|b| b.to_instance(&self.registry))
            .collect()
    }
}
