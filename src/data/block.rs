use enum_map::Enum;

#[derive(Debug, Enum, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BlockType {
    Dirt,
    Stone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockData {
    pub block_type: BlockType,
    /// Textures are loaded separately as a texture array. This indexes into it.
    pub texture_index: u32,
    pub texture_path: &'static str,
}

pub const TEXTURE_FOLDER: &str = "res/textures";

impl BlockType {
    /// Static description of each block kind
    pub const fn data(self) -> BlockData {
        match self {
            BlockType::Dirt => BlockData {
                block_type: BlockType::Dirt,
                texture_index: 0,
                texture_path: "dirt_texture.png",
            },
            BlockType::Stone => BlockData {
                block_type: BlockType::Stone,
                texture_index: 1,
                texture_path: "stone_texture.png",
            },
        }
    }
}
