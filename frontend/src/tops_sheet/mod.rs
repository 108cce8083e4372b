pub mod confirm_sheet;
pub mod yw_material_top_sheet;
