//! Table identifiers.
//!
//! The declaration order of [`DbTable`] is the positional index used by the
//! registry, and it is also the order tables are created in.

use crate::error::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DbTable {
    /// Sentinel, never backed by a descriptor.
    None,

    // Meta and settings
    Meta,
    Settings,

    // Domain entities
    Equipment,
    Fermentable,
    Hop,
    Misc,
    Style,
    Yeast,
    Water,
    Mash,
    MashStep,
    Recipe,
    BrewNote,
    Instruction,

    // Internal mirrors
    BtEquipment,
    BtFermentable,
    BtHop,
    BtMisc,
    BtStyle,
    BtYeast,
    BtWater,

    // In-recipe junctions
    FermentableInRecipe,
    HopInRecipe,
    MiscInRecipe,
    WaterInRecipe,
    YeastInRecipe,
    InstructionInRecipe,

    // Children
    EquipmentChildren,
    FermentableChildren,
    HopChildren,
    MiscChildren,
    RecipeChildren,
    StyleChildren,
    WaterChildren,
    YeastChildren,

    // Inventory
    FermentableInventory,
    HopInventory,
    MiscInventory,
    YeastInventory,
}

impl DbTable {
    /// Every real table, in declaration order. Excludes the sentinel.
    pub const ALL: [DbTable; 39] = [
        Self::Meta,
        Self::Settings,
        Self::Equipment,
        Self::Fermentable,
        Self::Hop,
        Self::Misc,
        Self::Style,
        Self::Yeast,
        Self::Water,
        Self::Mash,
        Self::MashStep,
        Self::Recipe,
        Self::BrewNote,
        Self::Instruction,
        Self::BtEquipment,
        Self::BtFermentable,
        Self::BtHop,
        Self::BtMisc,
        Self::BtStyle,
        Self::BtYeast,
        Self::BtWater,
        Self::FermentableInRecipe,
        Self::HopInRecipe,
        Self::MiscInRecipe,
        Self::WaterInRecipe,
        Self::YeastInRecipe,
        Self::InstructionInRecipe,
        Self::EquipmentChildren,
        Self::FermentableChildren,
        Self::HopChildren,
        Self::MiscChildren,
        Self::RecipeChildren,
        Self::StyleChildren,
        Self::WaterChildren,
        Self::YeastChildren,
        Self::FermentableInventory,
        Self::HopInventory,
        Self::MiscInventory,
        Self::YeastInventory,
    ];

    /// Positional index. The sentinel is 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`DbTable::index`]. The sentinel and anything past the
    /// last table map to `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index == 0 {
            return None;
        }
        Self::ALL.get(index - 1).copied()
    }
}

/// Classification of a table by the role it plays in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Bookkeeping tables (schema version, settings).
    Meta,
    /// Tables storing a domain entity.
    Base,
    /// Application-private mirrors of a base table holding default data.
    Internal,
    /// Junctions linking an ingredient to a recipe.
    InRecipe,
    /// Parent/child links between versions of an entity.
    Child,
    /// On-hand stock for an ingredient.
    Inventory,
}

impl TableKind {
    pub fn from_str(s: &str) -> Result<Self, SchemaError> {
        match s.to_lowercase().as_str() {
            "meta" => Ok(Self::Meta),
            "base" => Ok(Self::Base),
            "internal" | "bt" => Ok(Self::Internal),
            "in_recipe" | "inrecipe" | "inrec" => Ok(Self::InRecipe),
            "child" | "children" => Ok(Self::Child),
            "inventory" | "inv" => Ok(Self::Inventory),
            _ => Err(SchemaError::UnknownKind(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Base => "base",
            Self::Internal => "internal",
            Self::InRecipe => "in_recipe",
            Self::Child => "child",
            Self::Inventory => "inventory",
        }
    }
}
