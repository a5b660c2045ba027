//! Table formatting utilities for CLI output.

use cardset::{ControlProperties, FormattingModel, FormattingSlice, RevertDescriptor};
use comfy_table::{presets, ContentArrangement, Table};

/// Entry count of one validated translation file.
pub struct StringsSummary {
    /// File path as given on the command line.
    pub file: String,
    /// Number of entries parsed.
    pub entries: usize,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// One row per compiled slice, card toggles included.
pub fn format_descriptor_table(model: &FormattingModel) -> Table {
    let mut table = new_table(vec!["Card", "Group", "Slice", "Control", "Value"]);

    for card in &model.cards {
        if let Some(toggle) = &card.top_level_toggle {
            table.add_row(slice_row(&card.uid, "", toggle));
        }
        for group in &card.groups {
            if let Some(toggle) = &group.top_level_toggle {
                table.add_row(slice_row(&card.uid, &group.uid, toggle));
            }
            for slice in &group.slices {
                table.add_row(slice_row(&card.uid, &group.uid, slice));
            }
            let items = group.container.iter().flat_map(|c| &c.container_items);
            for item in items {
                for slice in &item.slices {
                    table.add_row(slice_row(&card.uid, &item.uid, slice));
                }
            }
        }
    }

    table
}

fn slice_row(card: &str, group: &str, slice: &FormattingSlice) -> Vec<String> {
    let value = match &slice.control.properties {
        ControlProperties::Simple(component) => component.value.to_string(),
        ControlProperties::Composite(parts) => format!("{} parts", parts.len()),
    };
    vec![
        card.to_string(),
        group.to_string(),
        slice.uid.clone(),
        format!("{:?}", slice.control.control_type),
        value,
    ]
}

/// One row per reverted property.
pub fn format_revert_table(descriptors: &[RevertDescriptor]) -> Table {
    let mut table = new_table(vec!["Object", "Property"]);

    for descriptor in descriptors {
        table.add_row(vec![
            descriptor.object_name.clone(),
            descriptor.property_name.clone(),
        ]);
    }

    table
}

/// Entry counts per translation file.
pub fn format_strings_table(files: &[StringsSummary]) -> Table {
    let mut table = new_table(vec!["File", "Entries"]);

    for file in files {
        table.add_row(vec![file.file.clone(), file.entries.to_string()]);
    }

    table
}

#[cfg(test)]
mod tests {
    use cardset::RevertDescriptor;

    use super::{format_revert_table, format_strings_table, StringsSummary};

    #[test]
    fn revert_table_lists_every_descriptor() {
        let descriptors = [
            RevertDescriptor::new("labels", "show"),
            RevertDescriptor::new("labels", "size"),
        ];
        let rendered = format_revert_table(&descriptors).to_string();
        assert!(rendered.contains("show"));
        assert!(rendered.contains("size"));
    }

    #[test]
    fn strings_table_shows_counts() {
        let files = [StringsSummary {
            file: "fr.strings".to_string(),
            entries: 12,
        }];
        let rendered = format_strings_table(&files).to_string();
        assert!(rendered.contains("fr.strings"));
        assert!(rendered.contains("12"));
    }
}
