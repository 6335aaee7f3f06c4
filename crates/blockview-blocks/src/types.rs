/// Voxel material. `Empty` is the "no voxel here" sentinel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BlockType {
    #[default]
    Empty,
    Topsoil,
    Dirt,
    Stone,
}

impl BlockType {
    /// Every non-empty type, in face-table order.
    pub const SOLID: [BlockType; 3] = [BlockType::Topsoil, BlockType::Dirt, BlockType::Stone];

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, BlockType::Empty)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_empty()
    }

    /// Row of this type in the face texture table; `None` for `Empty`.
    #[inline]
    pub fn solid_index(self) -> Option<usize> {
        match self {
            BlockType::Empty => None,
            BlockType::Topsoil => Some(0),
            BlockType::Dirt => Some(1),
            BlockType::Stone => Some(2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Empty => "empty",
            BlockType::Topsoil => "topsoil",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
        }
    }

    pub fn from_name(name: &str) -> Option<BlockType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "empty" | "air" => Some(BlockType::Empty),
            "topsoil" | "grass" => Some(BlockType::Topsoil),
            "dirt" => Some(BlockType::Dirt),
            "stone" => Some(BlockType::Stone),
            _ => None,
        }
    }
}
