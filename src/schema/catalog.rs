//! Table definitions for the brewing database.
//!
//! [`describe`] is the single place a table's name, columns and relations
//! are defined. Column lists are consts so descriptors can borrow them for
//! `'static`.

use super::column::{ColumnDef, DefaultValue};
use super::table_schema::TableSchema;
use super::types::ColumnType;
use crate::table::{DbTable, TableKind};

// =============================================================================
// Meta
// =============================================================================

const META_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name"),
    ColumnDef::integer("version"),
    ColumnDef::integer("table_id"),
];

const SETTINGS_COLUMNS: &[ColumnDef] = &[
    ColumnDef::integer("version"),
    ColumnDef::integer("repopulatechildrenonnextstart"),
];

// =============================================================================
// Domain entities
// =============================================================================

const EQUIPMENT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::real("boil_size"),
    ColumnDef::real("batch_size"),
    ColumnDef::real("tun_volume"),
    ColumnDef::real("tun_weight"),
    ColumnDef::real("tun_specific_heat"),
    ColumnDef::real("top_up_water"),
    ColumnDef::real("trub_chiller_loss"),
    ColumnDef::real("evap_rate"),
    ColumnDef::real("boil_time"),
    ColumnDef::boolean("calc_boil_volume", false),
    ColumnDef::real("lauter_deadspace"),
    ColumnDef::real("top_up_kettle"),
    ColumnDef::new("hop_utilization", ColumnType::Real).with_default(DefaultValue::Real(100.0)),
    ColumnDef::text("notes"),
    ColumnDef::real("real_evap_rate"),
    ColumnDef::new("boiling_point", ColumnType::Real).with_default(DefaultValue::Real(100.0)),
    ColumnDef::new("absorption", ColumnType::Real).with_default(DefaultValue::Real(1.085)),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
];

const FERMENTABLE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::new("ftype", ColumnType::Text).with_default(DefaultValue::Text("Grain")),
    ColumnDef::real("amount"),
    ColumnDef::real("yield"),
    ColumnDef::real("color"),
    ColumnDef::boolean("add_after_boil", false),
    ColumnDef::text("origin"),
    ColumnDef::text("supplier"),
    ColumnDef::text("notes"),
    ColumnDef::real("coarse_fine_diff"),
    ColumnDef::real("moisture"),
    ColumnDef::real("diastatic_power"),
    ColumnDef::real("protein"),
    ColumnDef::new("max_in_batch", ColumnType::Real).with_default(DefaultValue::Real(100.0)),
    ColumnDef::boolean("recommend_mash", false),
    ColumnDef::boolean("is_mashed", false),
    ColumnDef::real("ibu_gal_per_lb"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
    ColumnDef::reference("inventory_id", DbTable::FermentableInventory),
];

const HOP_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::real("alpha"),
    ColumnDef::real("amount"),
    ColumnDef::new("use", ColumnType::Text).with_default(DefaultValue::Text("Boil")),
    ColumnDef::real("time"),
    ColumnDef::text("notes"),
    ColumnDef::new("htype", ColumnType::Text).with_default(DefaultValue::Text("Both")),
    ColumnDef::new("form", ColumnType::Text).with_default(DefaultValue::Text("Pellet")),
    ColumnDef::real("beta"),
    ColumnDef::real("hsi"),
    ColumnDef::text("origin"),
    ColumnDef::text("substitutes"),
    ColumnDef::real("humulene"),
    ColumnDef::real("caryophyllene"),
    ColumnDef::real("cohumulone"),
    ColumnDef::real("myrcene"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
    ColumnDef::reference("inventory_id", DbTable::HopInventory),
];

const MISC_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::new("mtype", ColumnType::Text).with_default(DefaultValue::Text("Other")),
    ColumnDef::new("use", ColumnType::Text).with_default(DefaultValue::Text("Boil")),
    ColumnDef::real("time"),
    ColumnDef::real("amount"),
    ColumnDef::boolean("amount_is_weight", true),
    ColumnDef::text("use_for"),
    ColumnDef::text("notes"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
    ColumnDef::reference("inventory_id", DbTable::MiscInventory),
];

const STYLE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::new("s_type", ColumnType::Text).with_default(DefaultValue::Text("Ale")),
    ColumnDef::text("category"),
    ColumnDef::text("category_number"),
    ColumnDef::text("style_letter"),
    ColumnDef::text("style_guide"),
    ColumnDef::real("og_min"),
    ColumnDef::real("og_max"),
    ColumnDef::real("fg_min"),
    ColumnDef::real("fg_max"),
    ColumnDef::real("ibu_min"),
    ColumnDef::real("ibu_max"),
    ColumnDef::real("color_min"),
    ColumnDef::real("color_max"),
    ColumnDef::real("abv_min"),
    ColumnDef::real("abv_max"),
    ColumnDef::real("carb_min"),
    ColumnDef::real("carb_max"),
    ColumnDef::text("notes"),
    ColumnDef::text("profile"),
    ColumnDef::text("ingredients"),
    ColumnDef::text("examples"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
];

const YEAST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::new("ytype", ColumnType::Text).with_default(DefaultValue::Text("Ale")),
    ColumnDef::new("form", ColumnType::Text).with_default(DefaultValue::Text("Liquid")),
    ColumnDef::real("amount"),
    ColumnDef::boolean("amount_is_weight", false),
    ColumnDef::text("laboratory"),
    ColumnDef::text("product_id"),
    ColumnDef::real("min_temperature"),
    ColumnDef::real("max_temperature"),
    ColumnDef::new("flocculation", ColumnType::Text).with_default(DefaultValue::Text("Medium")),
    ColumnDef::new("attenuation", ColumnType::Real).with_default(DefaultValue::Real(75.0)),
    ColumnDef::text("notes"),
    ColumnDef::text("best_for"),
    ColumnDef::integer("times_cultured"),
    ColumnDef::new("max_reuse", ColumnType::Integer).with_default(DefaultValue::Integer(10)),
    ColumnDef::boolean("add_to_secondary", false),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
    ColumnDef::reference("inventory_id", DbTable::YeastInventory),
];

const WATER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::real("amount"),
    ColumnDef::real("calcium"),
    ColumnDef::real("bicarbonate"),
    ColumnDef::real("sulfate"),
    ColumnDef::real("chloride"),
    ColumnDef::real("sodium"),
    ColumnDef::real("magnesium"),
    ColumnDef::new("ph", ColumnType::Real).with_default(DefaultValue::Real(7.0)),
    ColumnDef::text("notes"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
];

const MASH_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name"),
    ColumnDef::real("grain_temp"),
    ColumnDef::text("notes"),
    ColumnDef::real("tun_temp"),
    ColumnDef::real("sparge_temp"),
    ColumnDef::new("ph", ColumnType::Real).with_default(DefaultValue::Real(7.0)),
    ColumnDef::real("tun_weight"),
    ColumnDef::real("tun_specific_heat"),
    ColumnDef::boolean("equip_adjust", true),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
];

const MASH_STEP_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name"),
    ColumnDef::new("mstype", ColumnType::Text).with_default(DefaultValue::Text("Infusion")),
    ColumnDef::real("infuse_amount"),
    ColumnDef::real("step_temp"),
    ColumnDef::real("step_time"),
    ColumnDef::real("ramp_time"),
    ColumnDef::real("end_temp"),
    ColumnDef::real("infuse_temp"),
    ColumnDef::real("decoction_amount"),
    ColumnDef::integer("step_number"),
    ColumnDef::reference("mash_id", DbTable::Mash),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
];

const RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name").not_null(),
    ColumnDef::new("type", ColumnType::Text).with_default(DefaultValue::Text("All Grain")),
    ColumnDef::text("brewer"),
    ColumnDef::text("assistant_brewer"),
    ColumnDef::real("batch_size"),
    ColumnDef::real("boil_size"),
    ColumnDef::real("boil_time"),
    ColumnDef::new("efficiency", ColumnType::Real).with_default(DefaultValue::Real(70.0)),
    ColumnDef::new("og", ColumnType::Real).with_default(DefaultValue::Real(1.0)),
    ColumnDef::new("fg", ColumnType::Real).with_default(DefaultValue::Real(1.0)),
    ColumnDef::integer("fermentation_stages"),
    ColumnDef::real("primary_age"),
    ColumnDef::real("primary_temp"),
    ColumnDef::real("secondary_age"),
    ColumnDef::real("secondary_temp"),
    ColumnDef::real("tertiary_age"),
    ColumnDef::real("tertiary_temp"),
    ColumnDef::real("age"),
    ColumnDef::real("age_temp"),
    ColumnDef::new("date", ColumnType::Date).with_default(DefaultValue::CurrentTimestamp),
    ColumnDef::real("carb_volume"),
    ColumnDef::boolean("forced_carb", false),
    ColumnDef::text("priming_sugar_name"),
    ColumnDef::real("carbonationtemp_c"),
    ColumnDef::real("priming_sugar_equiv"),
    ColumnDef::real("keg_priming_factor"),
    ColumnDef::text("notes"),
    ColumnDef::text("taste_notes"),
    ColumnDef::real("taste_rating"),
    ColumnDef::reference("style_id", DbTable::Style),
    ColumnDef::reference("mash_id", DbTable::Mash),
    ColumnDef::reference("equipment_id", DbTable::Equipment),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
    ColumnDef::text("folder"),
];

const BREW_NOTE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("brewdate", ColumnType::Timestamp).with_default(DefaultValue::CurrentTimestamp),
    ColumnDef::new("fermentdate", ColumnType::Timestamp),
    ColumnDef::real("sg"),
    ColumnDef::real("volume_into_bk"),
    ColumnDef::real("strike_temp"),
    ColumnDef::real("mash_final_temp"),
    ColumnDef::real("og"),
    ColumnDef::real("post_boil_volume"),
    ColumnDef::real("volume_into_fermenter"),
    ColumnDef::real("pitch_temp"),
    ColumnDef::real("fg"),
    ColumnDef::real("eff_into_bk"),
    ColumnDef::real("predicted_og"),
    ColumnDef::real("brewhouse_eff"),
    ColumnDef::real("predicted_abv"),
    ColumnDef::real("projected_boil_grav"),
    ColumnDef::real("projected_vol_into_bk"),
    ColumnDef::real("projected_ferm_points"),
    ColumnDef::real("final_volume"),
    ColumnDef::text("notes"),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
];

const INSTRUCTION_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name"),
    ColumnDef::text("directions"),
    ColumnDef::boolean("hastimer", false),
    ColumnDef::new("timervalue", ColumnType::Text).with_default(DefaultValue::Text("0:00:00")),
    ColumnDef::boolean("completed", false),
    ColumnDef::real("interval"),
    ColumnDef::boolean("deleted", false),
    ColumnDef::boolean("display", true),
];

// =============================================================================
// Internal mirrors
// =============================================================================

const BT_EQUIPMENT_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("equipment_id", DbTable::Equipment)];
const BT_FERMENTABLE_COLUMNS: &[ColumnDef] =
    &[ColumnDef::reference("fermentable_id", DbTable::Fermentable)];
const BT_HOP_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("hop_id", DbTable::Hop)];
const BT_MISC_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("misc_id", DbTable::Misc)];
const BT_STYLE_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("style_id", DbTable::Style)];
const BT_YEAST_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("yeast_id", DbTable::Yeast)];
const BT_WATER_COLUMNS: &[ColumnDef] = &[ColumnDef::reference("water_id", DbTable::Water)];

// =============================================================================
// In-recipe junctions
// =============================================================================

const FERMENTABLE_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("fermentable_id", DbTable::Fermentable),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
];
const HOP_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("hop_id", DbTable::Hop),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
];
const MISC_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("misc_id", DbTable::Misc),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
];
const WATER_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("water_id", DbTable::Water),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
];
const YEAST_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("yeast_id", DbTable::Yeast),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
];
const INSTRUCTION_IN_RECIPE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("instruction_id", DbTable::Instruction),
    ColumnDef::reference("recipe_id", DbTable::Recipe),
    ColumnDef::integer("instruction_number"),
];

// =============================================================================
// Children
// =============================================================================

const EQUIPMENT_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Equipment),
    ColumnDef::reference("child_id", DbTable::Equipment),
];
const FERMENTABLE_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Fermentable),
    ColumnDef::reference("child_id", DbTable::Fermentable),
];
const HOP_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Hop),
    ColumnDef::reference("child_id", DbTable::Hop),
];
const MISC_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Misc),
    ColumnDef::reference("child_id", DbTable::Misc),
];
const RECIPE_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Recipe),
    ColumnDef::reference("child_id", DbTable::Recipe),
];
const STYLE_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Style),
    ColumnDef::reference("child_id", DbTable::Style),
];
const WATER_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Water),
    ColumnDef::reference("child_id", DbTable::Water),
];
const YEAST_CHILDREN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::reference("parent_id", DbTable::Yeast),
    ColumnDef::reference("child_id", DbTable::Yeast),
];

// =============================================================================
// Inventory
// =============================================================================

const AMOUNT_INVENTORY_COLUMNS: &[ColumnDef] = &[ColumnDef::real("amount")];
const YEAST_INVENTORY_COLUMNS: &[ColumnDef] = &[ColumnDef::real("quanta")];

/// Build the descriptor for `table`. The sentinel has none.
pub fn describe(table: DbTable) -> Option<TableSchema> {
    use DbTable as D;
    use TableKind as K;

    let t = |name, kind, columns| TableSchema::new(table, name, kind, columns);

    let schema = match table {
        D::None => return None,

        D::Meta => t("bt_alltables", K::Meta, META_COLUMNS),
        D::Settings => t("settings", K::Meta, SETTINGS_COLUMNS),

        D::Equipment => t("equipment", K::Base, EQUIPMENT_COLUMNS)
            .with_class("Equipment")
            .with_child(D::EquipmentChildren)
            .with_internal(D::BtEquipment),
        D::Fermentable => t("fermentable", K::Base, FERMENTABLE_COLUMNS)
            .with_class("Fermentable")
            .with_child(D::FermentableChildren)
            .with_in_recipe(D::FermentableInRecipe)
            .with_inventory(D::FermentableInventory)
            .with_internal(D::BtFermentable),
        D::Hop => t("hop", K::Base, HOP_COLUMNS)
            .with_class("Hop")
            .with_child(D::HopChildren)
            .with_in_recipe(D::HopInRecipe)
            .with_inventory(D::HopInventory)
            .with_internal(D::BtHop),
        D::Misc => t("misc", K::Base, MISC_COLUMNS)
            .with_class("Misc")
            .with_child(D::MiscChildren)
            .with_in_recipe(D::MiscInRecipe)
            .with_inventory(D::MiscInventory)
            .with_internal(D::BtMisc),
        D::Style => t("style", K::Base, STYLE_COLUMNS)
            .with_class("Style")
            .with_child(D::StyleChildren)
            .with_internal(D::BtStyle),
        D::Yeast => t("yeast", K::Base, YEAST_COLUMNS)
            .with_class("Yeast")
            .with_child(D::YeastChildren)
            .with_in_recipe(D::YeastInRecipe)
            .with_inventory(D::YeastInventory)
            .with_internal(D::BtYeast),
        D::Water => t("water", K::Base, WATER_COLUMNS)
            .with_class("Water")
            .with_child(D::WaterChildren)
            .with_in_recipe(D::WaterInRecipe)
            .with_internal(D::BtWater),
        D::Mash => t("mash", K::Base, MASH_COLUMNS).with_class("Mash"),
        D::MashStep => t("mashstep", K::Base, MASH_STEP_COLUMNS).with_class("MashStep"),
        D::Recipe => t("recipe", K::Base, RECIPE_COLUMNS)
            .with_class("Recipe")
            .with_child(D::RecipeChildren),
        D::BrewNote => t("brewnote", K::Base, BREW_NOTE_COLUMNS).with_class("BrewNote"),
        D::Instruction => t("instruction", K::Base, INSTRUCTION_COLUMNS)
            .with_class("Instruction")
            .with_in_recipe(D::InstructionInRecipe),

        D::BtEquipment => t("bt_equipment", K::Internal, BT_EQUIPMENT_COLUMNS),
        D::BtFermentable => t("bt_fermentable", K::Internal, BT_FERMENTABLE_COLUMNS),
        D::BtHop => t("bt_hop", K::Internal, BT_HOP_COLUMNS),
        D::BtMisc => t("bt_misc", K::Internal, BT_MISC_COLUMNS),
        D::BtStyle => t("bt_style", K::Internal, BT_STYLE_COLUMNS),
        D::BtYeast => t("bt_yeast", K::Internal, BT_YEAST_COLUMNS),
        D::BtWater => t("bt_water", K::Internal, BT_WATER_COLUMNS),

        D::FermentableInRecipe => t("fermentable_in_recipe", K::InRecipe, FERMENTABLE_IN_RECIPE_COLUMNS),
        D::HopInRecipe => t("hop_in_recipe", K::InRecipe, HOP_IN_RECIPE_COLUMNS),
        D::MiscInRecipe => t("misc_in_recipe", K::InRecipe, MISC_IN_RECIPE_COLUMNS),
        D::WaterInRecipe => t("water_in_recipe", K::InRecipe, WATER_IN_RECIPE_COLUMNS),
        D::YeastInRecipe => t("yeast_in_recipe", K::InRecipe, YEAST_IN_RECIPE_COLUMNS),
        D::InstructionInRecipe => t("instruction_in_recipe", K::InRecipe, INSTRUCTION_IN_RECIPE_COLUMNS),

        D::EquipmentChildren => t("equipment_children", K::Child, EQUIPMENT_CHILDREN_COLUMNS),
        D::FermentableChildren => t("fermentable_children", K::Child, FERMENTABLE_CHILDREN_COLUMNS),
        D::HopChildren => t("hop_children", K::Child, HOP_CHILDREN_COLUMNS),
        D::MiscChildren => t("misc_children", K::Child, MISC_CHILDREN_COLUMNS),
        D::RecipeChildren => t("recipe_children", K::Child, RECIPE_CHILDREN_COLUMNS),
        D::StyleChildren => t("style_children", K::Child, STYLE_CHILDREN_COLUMNS),
        D::WaterChildren => t("water_children", K::Child, WATER_CHILDREN_COLUMNS),
        D::YeastChildren => t("yeast_children", K::Child, YEAST_CHILDREN_COLUMNS),

        D::FermentableInventory => t("fermentable_in_inventory", K::Inventory, AMOUNT_INVENTORY_COLUMNS),
        D::HopInventory => t("hop_in_inventory", K::Inventory, AMOUNT_INVENTORY_COLUMNS),
        D::MiscInventory => t("misc_in_inventory", K::Inventory, AMOUNT_INVENTORY_COLUMNS),
        D::YeastInventory => t("yeast_in_inventory", K::Inventory, YEAST_INVENTORY_COLUMNS),
    };

    Some(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sentinel_has_no_descriptor() {
        assert!(describe(DbTable::None).is_none());
    }

    #[test]
    fn test_descriptor_id_matches_table() {
        for table in DbTable::ALL {
            let schema = describe(table).unwrap();
            assert_eq!(schema.table, table);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = DbTable::ALL
            .iter()
            .map(|t| describe(*t).unwrap().name)
            .collect();
        assert_eq!(names.len(), DbTable::ALL.len());
    }

    #[test]
    fn test_column_names_unique_per_table() {
        for table in DbTable::ALL {
            let schema = describe(table).unwrap();
            let names: HashSet<&str> = schema.columns.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), schema.columns.len(), "{}", schema.name);
            assert!(schema.column("id").is_none(), "{} redefines the key", schema.name);
        }
    }

    #[test]
    fn test_relations_point_to_matching_kinds() {
        for table in DbTable::ALL {
            let schema = describe(table).unwrap();
            let check = |rel: Option<DbTable>, kind: TableKind| {
                if let Some(rel) = rel {
                    assert_eq!(describe(rel).unwrap().kind, kind, "{}", schema.name);
                }
            };
            check(schema.child_table, TableKind::Child);
            check(schema.in_recipe_table, TableKind::InRecipe);
            check(schema.inventory_table, TableKind::Inventory);
            check(schema.internal_table, TableKind::Internal);
        }
    }

    #[test]
    fn test_foreign_keys_point_back_or_to_inventory() {
        // only an ingredient's own inventory table may be declared later
        for table in DbTable::ALL {
            let schema = describe(table).unwrap();
            for column in schema.columns {
                if let Some(target) = column.foreign_key {
                    assert!(
                        target <= table || schema.inventory_table == Some(target),
                        "{}.{}",
                        schema.name,
                        column.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_ingredients_reference_their_inventory() {
        for table in [DbTable::Fermentable, DbTable::Hop, DbTable::Misc, DbTable::Yeast] {
            let schema = describe(table).unwrap();
            let column = schema.column("inventory_id").unwrap();
            assert_eq!(column.foreign_key, schema.inventory_table, "{}", schema.name);
        }
        assert!(describe(DbTable::Style).unwrap().column("inventory_id").is_none());
    }

    #[test]
    fn test_only_base_tables_have_class_names() {
        for table in DbTable::ALL {
            let schema = describe(table).unwrap();
            assert_eq!(schema.class_name.is_some(), schema.is_base_table(), "{}", schema.name);
        }
    }
}
