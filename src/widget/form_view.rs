//! Form layout: selectors, dimension inputs, calculate button, result

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, dropdown, horizontal_space, text, text_input};

use crate::domain::{ShapeKind, Unit};
use crate::fl;
use crate::form::{Field, FormState, Msg};

/// Dropdown label for a shape kind
pub fn shape_label(kind: ShapeKind) -> String {
    match kind {
        ShapeKind::Square => fl!("shape-square"),
        ShapeKind::Rectangle => fl!("shape-rectangle"),
        ShapeKind::Triangle => fl!("shape-triangle"),
        ShapeKind::Circle => fl!("shape-circle"),
    }
}

/// Dropdown label for a unit
pub fn unit_label(unit: Unit) -> String {
    match unit {
        Unit::Centimeters => fl!("unit-centimeters"),
        Unit::Inches => fl!("unit-inches"),
    }
}

fn field_label(field: Field) -> String {
    match field {
        Field::Side => fl!("field-side"),
        Field::Length => fl!("field-length"),
        Field::Width => fl!("field-width"),
        Field::Base => fl!("field-base"),
        Field::Height => fl!("field-height"),
        Field::Diameter => fl!("field-diameter"),
    }
}

fn labeled_row<'a>(label: String, control: Element<'a, Msg>) -> Element<'a, Msg> {
    row![text::body(label), horizontal_space(), control]
        .spacing(8)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

/// Build the form for the current state
pub fn build_form<'a>(
    form: &'a FormState,
    result: Option<&'a str>,
    shape_labels: &'a [String],
    unit_labels: &'a [String],
) -> Element<'a, Msg> {
    let shape_index = ShapeKind::ALL.iter().position(|k| *k == form.kind);
    let unit_index = Unit::ALL.iter().position(|u| *u == form.unit);

    let shape_row = labeled_row(
        fl!("choose-shape"),
        dropdown(shape_labels, shape_index, |index| {
            Msg::ShapeSelected(ShapeKind::ALL[index])
        })
        .into(),
    );

    let unit_row = labeled_row(
        fl!("choose-unit"),
        dropdown(unit_labels, unit_index, |index| {
            Msg::UnitSelected(Unit::ALL[index])
        })
        .into(),
    );

    let mut content = column![shape_row, unit_row]
        .spacing(12)
        .padding(16)
        .width(Length::Fill);

    for field in form.visible_fields() {
        let field = *field;
        let input = text_input("", form.value(field))
            .on_input(move |value| Msg::FieldEdited(field, value))
            .width(Length::Fixed(160.0));
        content = content.push(labeled_row(field_label(field), input.into()));
    }

    content = content.push(
        row![
            horizontal_space(),
            button::suggested(fl!("calculate")).on_press(Msg::Calculate),
            horizontal_space(),
        ]
        .width(Length::Fill),
    );

    // One message at a time: the area string or the error text
    if let Some(result) = result {
        content = content.push(
            row![horizontal_space(), text::body(result), horizontal_space()].width(Length::Fill),
        );
    }

    content.into()
}
