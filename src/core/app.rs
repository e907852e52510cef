use cosmic::app;

use crate::config::PlanimeterConfig;
use crate::domain::{ShapeKind, Unit};
use crate::fl;
use crate::form::{FormState, Msg};
use crate::widget::form_view;

pub(crate) fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(cosmic::iced::Size::new(380.0, 420.0));
    cosmic::app::run::<App>(settings, ())
}

pub struct App {
    pub core: app::Core,
    pub config: PlanimeterConfig,
    pub form: FormState,
    /// Formatted area or error text from the last calculate action
    pub result: Option<String>,
    /// Dropdown labels, cached since fl! allocates
    pub shape_labels: Vec<String>,
    pub unit_labels: Vec<String>,
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Msg;

    const APP_ID: &'static str = "io.github.planimeter.planimeter";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        _flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let config = PlanimeterConfig::load();
        let form = FormState::new(config.shape_kind, config.unit);

        (
            Self {
                core,
                config,
                form,
                result: None,
                shape_labels: ShapeKind::ALL
                    .iter()
                    .map(|kind| form_view::shape_label(*kind))
                    .collect(),
                unit_labels: Unit::ALL
                    .iter()
                    .map(|unit| form_view::unit_label(*unit))
                    .collect(),
            },
            cosmic::iced::Task::none(),
        )
    }

    fn header_center(&self) -> Vec<cosmic::Element<'_, Self::Message>> {
        vec![cosmic::widget::text::heading(fl!("app-title")).into()]
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        form_view::build_form(
            &self.form,
            self.result.as_deref(),
            &self.shape_labels,
            &self.unit_labels,
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::ShapeSelected(kind) => {
                // Field set changes with the kind, so stale text and the
                // previous result are discarded.
                self.form.select_kind(kind);
                self.result = None;
                if self.config.shape_kind != kind {
                    self.config.shape_kind = kind;
                    self.config.save();
                }
            }
            Msg::UnitSelected(unit) => {
                self.form.unit = unit;
                if self.config.unit != unit {
                    self.config.unit = unit;
                    self.config.save();
                }
            }
            Msg::FieldEdited(field, text) => {
                self.form.set_value(field, text);
            }
            Msg::Calculate => {
                let outcome = self.form.calculate();
                match &outcome {
                    Ok(text) => log::debug!(
                        "{} ({}): {}",
                        self.form.kind.name(),
                        self.form.unit.name(),
                        text
                    ),
                    Err(err) => log::debug!("{} rejected: {}", self.form.kind.name(), err),
                }
                self.result = Some(outcome.unwrap_or_else(|err| err.to_string()));
            }
        }
        cosmic::iced::Task::none()
    }
}
