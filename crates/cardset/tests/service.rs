//! End-to-end tests through the settings service.

use cardset::compiler::SettingsService;
use cardset::localize::TranslationTable;
use cardset::{
    Card, CompositeKind, CompositeSlice, Group, HostSnapshot, Model, SimpleCard, SimpleSlice,
    SliceKind,
};
use serde_json::json;

/// Plugin-side settings, rebuilt from defaults on every refresh.
struct ChartSettings {
    model: Model,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let fill = SimpleSlice::builder()
            .name("fill")
            .display_name("Fill")
            .display_name_key("Fill_Key")
            .kind(SliceKind::color_picker())
            .value("#FF0000")
            .build();
        let colors = Group::builder()
            .name("dataColors")
            .slices(vec![fill.into()])
            .build();

        let font = CompositeSlice::builder()
            .name("font")
            .kind(CompositeKind::FontControl {
                font_family: SimpleSlice::builder()
                    .name("family")
                    .kind(SliceKind::FontPicker)
                    .value("Arial")
                    .build(),
                font_size: SimpleSlice::builder()
                    .name("size")
                    .kind(SliceKind::num_up_down())
                    .value(12)
                    .build(),
                bold: None,
                italic: None,
                underline: None,
            })
            .build();
        let labels = Group::builder()
            .name("labels")
            .slices(vec![font.into()])
            .build();

        Self {
            model: Model::new(vec![
                Card::from(SimpleCard::new(colors)),
                Card::from(SimpleCard::new(labels)),
            ]),
        }
    }
}

impl AsMut<Model> for ChartSettings {
    fn as_mut(&mut self) -> &mut Model {
        &mut self.model
    }
}

#[test]
fn persisted_color_reaches_the_descriptor() {
    let service = SettingsService::new();
    let snapshot = HostSnapshot::from_json(&json!({
        "dataColors": { "fill": { "solid": { "color": "#00FF00" } } }
    }));

    let mut settings: ChartSettings = service.populate_model(Some(&snapshot));
    let slice = settings.model.cards[0].groups()[0].slices[0].as_simple().unwrap();
    assert_eq!(slice.value, json!("#00FF00"));

    let pane = service.build_formatting_model(settings.as_mut());
    let component = pane.cards[0].groups[0].slices[0]
        .control
        .properties
        .as_simple()
        .unwrap();
    assert_eq!(component.value, json!({ "value": "#00FF00" }));
    assert_eq!(component.descriptor.object_name, "dataColors");
    assert_eq!(component.descriptor.property_name, "fill");
}

#[test]
fn composite_round_trip_keeps_untouched_parts() {
    let service = SettingsService::new();
    let snapshot = HostSnapshot::from_json(&json!({ "labels": { "size": 14 } }));

    let mut settings: ChartSettings = service.populate_model(Some(&snapshot));
    let pane = service.build_formatting_model(settings.as_mut());

    let properties = &pane.cards[1].groups[0].slices[0].control.properties;
    assert_eq!(properties.part("fontFamily").unwrap().value, json!("Arial"));
    assert_eq!(properties.part("fontSize").unwrap().value, json!(14));
}

#[test]
fn every_population_starts_from_defaults() {
    let service = SettingsService::new();
    let first = HostSnapshot::from_json(&json!({ "labels": { "size": 20 } }));

    let populated: ChartSettings = service.populate_model(Some(&first));
    let fresh: ChartSettings = service.populate_model(None);

    let size = |settings: &ChartSettings| {
        let font = settings.model.cards[1].groups()[0].slices[0]
            .as_composite()
            .unwrap();
        font.kind.parts()[1].1.value.clone()
    };
    assert_eq!(size(&populated), json!(20));
    assert_eq!(size(&fresh), json!(12));
}

#[test]
fn service_localizes_through_its_localizer() {
    let table = TranslationTable::parse(r#"Fill_Key = "Remplissage";"#).unwrap();
    let service = SettingsService::with_localizer(&table);

    let mut settings: ChartSettings = service.populate_model(None);
    let pane = service.build_formatting_model(settings.as_mut());
    assert_eq!(
        pane.cards[0].groups[0].slices[0].display_name.as_deref(),
        Some("Remplissage")
    );
}
