use std::path::{Path, PathBuf};

use enum_map::EnumMap;

use crate::data::block::{BlockType, TEXTURE_FOLDER};

/// What the renderer needs to draw a block kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle {
    pub index: u32,
    pub path: &'static str,
}

impl TextureHandle {
    /// Location of the texture image on disk
    pub fn full_path(&self) -> PathBuf {
        Path::new(TEXTURE_FOLDER).join(self.path)
    }
}

/// Maps each block kind to its visual identity
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    textures: EnumMap<BlockType, TextureHandle>,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    pub fn new() -> Self {
        let textures = EnumMap::from_fn(|block_type: BlockType| {
            let data = block_type.data();
            TextureHandle {
                index: data.texture_index,
                path: data.texture_path,
            }
        });

        Self { textures }
    }

    #[inline]
    pub fn texture_for(&self, block_type: BlockType) -> TextureHandle {
        self.textures[block_type]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockType, &TextureHandle)> {
        self.textures.iter()
    }
}
