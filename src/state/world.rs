use cgmath::{Point3, Vector3};
use itertools::iproduct;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::{
    block::Block,
    data::block::BlockType,
    math::ray::{Ray, RayCollision},
};

/// Represents the position of a block in block-space (1 unit moves 1 block length)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Point3<i32>);

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Point3::new(x, y, z))
    }

    pub fn to_world_pos(&self) -> WorldPos {
        WorldPos(Point3::new(self.0.x as f32, self.0.y as f32, self.0.z as f32))
    }

    /// The position directly on top of this one
    pub fn above(&self) -> Self {
        Self(self.0 + Vector3::unit_y())
    }
}

/// Represents any position in the world in block-space (1 unit moves 1 block length)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPos(pub Point3<f32>);

impl WorldPos {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Point3::new(x, y, z))
    }
}

/// All of the placed blocks
#[derive(Debug, Default)]
pub struct World {
    // Insertion ordered
    blocks: Vec<Block>,
    // Position -> index into blocks
    index: FxHashMap<BlockPos, usize>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat layer of random dirt & stone at y = 0, spanning [-half_extent, half_extent) on x and z
    pub fn generate_flat<R: Rng>(half_extent: i32, rng: &mut R) -> Self {
        let mut world = Self::new();

        iproduct!(-half_extent..half_extent, -half_extent..half_extent).for_each(|(x, z)| {
            let block_type = if rng.random_bool(0.5) {
                BlockType::Dirt
            } else {
                BlockType::Stone
            };
            world.add_block(BlockPos::new(x, 0, z), block_type);
        });

        log::info!("Generated flat world with {} blocks", world.len());
        world
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn get_block(&self, pos: &BlockPos) -> Option<&Block> {
        self.index.get(pos).map(|&i| &self.blocks[i])
    }

    /// Place a block. If the position is already occupied, the existing block takes on the new
    /// type and keeps its place in the insertion order.
    pub fn add_block(&mut self, pos: BlockPos, block_type: BlockType) -> Block {
        let block = Block {
            block_pos: pos,
            block_type,
        };

        match self.index.get(&pos) {
            Some(&i) => {
                log::debug!("Replacing {:?} at {pos:?}", self.blocks[i].block_type);
                self.blocks[i] = block;
            }
            None => {
                self.index.insert(pos, self.blocks.len());
                self.blocks.push(block);
            }
        }

        block
    }

    /// Remove the block at the given position. Does nothing if there isn't one.
    pub fn remove_block(&mut self, pos: &BlockPos) -> Option<Block> {
        let i = self.index.remove(pos)?;
        let block = self.blocks.remove(i);

        // Everything after the removed block shifted down by one
        for (j, b) in self.blocks.iter().enumerate().skip(i) {
            self.index.insert(b.block_pos, j);
        }

        Some(block)
    }

    /// Find the nearest block along the ray. Ties go to the block that was placed first.
    pub fn cast_ray(&self, ray: &Ray) -> Option<(Block, RayCollision)> {
        self.blocks
            .iter()
            .filter_map(|block| block.aabb().intersect_ray(ray).map(|col| (block, col)))
            .min_by(|(_, c1), (_, c2)| c1.distance.total_cmp(&c2.distance))
            .map(|(block, col)| (*block, col))
    }
}
