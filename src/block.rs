use crate::{
    data::{block::BlockType, registry::BlockRegistry},
    math::bbox::AABB,
    state::world::BlockPos,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub block_pos: BlockPos,
    pub block_type: BlockType,
}

/// Per-block data handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub position: [f32; 3],
    pub texture_index: u32,
}

impl Block {
    #[inline]
    pub fn to_instance(&self, registry: &BlockRegistry) -> Instance {
        Instance {
            position: self.block_pos.to_world_pos().0.into(),
            texture_index: registry.texture_for(self.block_type).index,
        }
    }

    /// Return the axis-aligned bounding box for this block. Blocks are centred on their position.
    #[inline]
    pub fn aabb(&self) -> AABB<f32> {
        AABB::unit_cube(&self.block_pos.to_world_pos().0)
    }
}
