// SPDX-License-Identifier: MPL-2.0
//! Contact form: debounced validation, simulated submission with retry.
//!
//! The form owns validation state and the submission phase machine. Actual
//! attempt execution (the network simulation) and retry sleeps run as tasks
//! owned by the application; the form only emits events asking for them and
//! reacts to their completion messages. Stale completions from an abandoned
//! submission round are ignored by phase guards.

pub mod retry;
pub mod validation;

pub use retry::RetryPolicy;
pub use validation::{Field, FieldError};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::Deadline;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Id, Text};
use iced::{Element, Length, Theme};
use std::time::{Duration, Instant};

/// Pause after the last keystroke before a field is validated.
pub const VALIDATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long the success banner stays up.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(5);

/// One form field's value and validation state.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
    debounce: Deadline,
}

/// Where the submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// An attempt (1-based) is in flight.
    Submitting { attempt: u8 },
    /// An attempt failed; the backoff before the next one is running.
    AwaitingRetry { attempt: u8 },
    /// Submission landed; the success banner is showing.
    Succeeded,
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    message: FieldState,
    phase: Phase,
    policy: RetryPolicy,
    success_banner: Deadline,
}

/// Messages handled by the form.
#[derive(Debug, Clone)]
pub enum Message {
    Input(Field, String),
    Blurred(Field),
    Submit,
    /// A submission attempt resolved.
    AttemptFinished { attempt: u8, success: bool },
    /// The backoff before `attempt` elapsed.
    RetryDelayElapsed { attempt: u8 },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A field was validated and found invalid (for announcements/focus).
    Invalid(Field),
    /// Run submission attempt `attempt`.
    StartAttempt { attempt: u8 },
    /// Sleep `delay`, then deliver `RetryDelayElapsed { attempt }`.
    ScheduleRetry { attempt: u8, delay: Duration },
    /// Submission succeeded; fields were reset.
    Succeeded,
    /// All attempts exhausted.
    Failed,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(
            self.phase,
            Phase::Submitting { .. } | Phase::AwaitingRetry { .. }
        )
    }

    #[must_use]
    pub fn shows_success_banner(&self) -> bool {
        self.phase == Phase::Succeeded
    }

    /// Whether any timed state (debounce, banner) needs tick polling.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.success_banner.is_pending()
            || Field::ALL.iter().any(|f| self.field(*f).debounce.is_pending())
    }

    /// Validates every field. Returns the first invalid one, if any.
    pub fn validate_all(&mut self) -> Option<Field> {
        let mut first_invalid = None;
        for field in Field::ALL {
            let state = self.field_mut(field);
            state.debounce.cancel();
            state.error = validation::validate(field, &state.value);
            if state.error.is_some() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        first_invalid
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Input(field, value) => {
                let state = self.field_mut(field);
                state.value = value;
                // Errors clear while typing; validation re-runs after the
                // debounce window.
                state.error = None;
                state.debounce.schedule(now, VALIDATION_DEBOUNCE);
                Event::None
            }
            Message::Blurred(field) => {
                let state = self.field_mut(field);
                state.debounce.cancel();
                state.error = validation::validate(field, &state.value);
                if state.error.is_some() {
                    Event::Invalid(field)
                } else {
                    Event::None
                }
            }
            Message::Submit => {
                if self.is_submitting() {
                    return Event::None;
                }
                if let Some(field) = self.validate_all() {
                    return Event::Invalid(field);
                }
                self.phase = Phase::Submitting { attempt: 1 };
                Event::StartAttempt { attempt: 1 }
            }
            Message::AttemptFinished { attempt, success } => {
                // Guard against completions from an abandoned round.
                if self.phase != (Phase::Submitting { attempt }) {
                    return Event::None;
                }
                if success {
                    self.reset_fields();
                    self.phase = Phase::Succeeded;
                    self.success_banner.schedule(now, SUCCESS_BANNER);
                    Event::Succeeded
                } else if self.policy.should_retry(attempt) {
                    self.phase = Phase::AwaitingRetry { attempt };
                    Event::ScheduleRetry {
                        attempt: attempt + 1,
                        delay: self.policy.delay_after(attempt),
                    }
                } else {
                    self.phase = Phase::Idle;
                    Event::Failed
                }
            }
            Message::RetryDelayElapsed { attempt } => {
                match self.phase {
                    Phase::AwaitingRetry { attempt: failed } if failed + 1 == attempt => {
                        self.phase = Phase::Submitting { attempt };
                        Event::StartAttempt { attempt }
                    }
                    _ => Event::None,
                }
            }
        }
    }

    /// Polls timed state: pending debounces validate their field, and the
    /// success banner clears after its window.
    pub fn tick(&mut self, now: Instant) {
        for field in Field::ALL {
            let state = self.field_mut(field);
            if state.debounce.fire(now) {
                state.error = validation::validate(field, &state.value);
            }
        }
        if self.success_banner.fire(now) && self.phase == Phase::Succeeded {
            self.phase = Phase::Idle;
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u8 {
        self.policy.max_attempts
    }

    fn reset_fields(&mut self) {
        for field in Field::ALL {
            let state = self.field_mut(field);
            state.value.clear();
            state.error = None;
            state.debounce.cancel();
        }
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ContactForm,
}

/// Render the contact form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .max_width(480)
        .push(
            Text::new(ctx.i18n.tr("contact-title"))
                .size(typography::TITLE_MD),
        );

    if ctx.form.shows_success_banner() {
        content = content.push(
            Container::new(
                Text::new(ctx.i18n.tr("form-success"))
                    .size(typography::BODY)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::SUCCESS_500),
                    }),
            )
            .padding(spacing::SM)
            .width(Length::Fill),
        );
    }

    for field in Field::ALL {
        content = content.push(field_view(&ctx, field));
    }

    let submitting = ctx.form.is_submitting();
    let label = if submitting {
        ctx.i18n.tr("form-submit-sending")
    } else {
        ctx.i18n.tr("form-submit")
    };
    let mut submit = button(Text::new(label)).padding([spacing::XS, spacing::LG]);
    if submitting {
        submit = submit.style(styles::button::disabled());
    } else {
        submit = submit.on_press(Message::Submit).style(styles::button::primary);
    }

    content.push(submit).into()
}

fn field_view<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let state = ctx.form.field(field);
    let label = Text::new(ctx.i18n.tr(field.label_key())).size(typography::BODY);

    let input = text_input(&ctx.i18n.tr(field.label_key()), &state.value)
        .id(Id::new(field.input_id()))
        .on_input(move |value| Message::Input(field, value))
        .on_submit(Message::Blurred(field))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let mut group = Column::new().spacing(spacing::XXS).push(label).push(input);

    if let Some(error) = state.error {
        let message = ctx.i18n.tr_with_args(
            error.message_key(),
            &[("field", &ctx.i18n.tr(field.label_key()))],
        );
        group = group.push(
            Text::new(message)
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    group.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let now = Instant::now();
        form.update(Message::Input(Field::Name, "Ada".into()), now);
        form.update(Message::Input(Field::Email, "ada@example.com".into()), now);
        form.update(Message::Input(Field::Message, "Hello".into()), now);
        form
    }

    #[test]
    fn typing_clears_error_and_debounces_validation() {
        let now = Instant::now();
        let mut form = ContactForm::new();

        form.update(Message::Input(Field::Email, "bad".into()), now);
        assert!(form.field(Field::Email).error.is_none());

        // Validation only runs once the debounce window has passed.
        form.tick(now + Duration::from_millis(100));
        assert!(form.field(Field::Email).error.is_none());

        form.tick(now + VALIDATION_DEBOUNCE);
        assert_eq!(
            form.field(Field::Email).error,
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn continued_typing_postpones_validation() {
        let now = Instant::now();
        let mut form = ContactForm::new();

        form.update(Message::Input(Field::Email, "b".into()), now);
        form.update(
            Message::Input(Field::Email, "ba".into()),
            now + Duration::from_millis(200),
        );

        form.tick(now + VALIDATION_DEBOUNCE);
        assert!(form.field(Field::Email).error.is_none());

        form.tick(now + Duration::from_millis(200) + VALIDATION_DEBOUNCE);
        assert_eq!(
            form.field(Field::Email).error,
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn submit_with_invalid_fields_reports_first_invalid() {
        let now = Instant::now();
        let mut form = ContactForm::new();
        form.update(Message::Input(Field::Email, "ada@example.com".into()), now);

        let event = form.update(Message::Submit, now);
        assert!(matches!(event, Event::Invalid(Field::Name)));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.field(Field::Name).error, Some(FieldError::Required));
        assert_eq!(form.field(Field::Message).error, Some(FieldError::Required));
    }

    #[test]
    fn valid_submit_starts_first_attempt() {
        let now = Instant::now();
        let mut form = filled_form();

        let event = form.update(Message::Submit, now);
        assert!(matches!(event, Event::StartAttempt { attempt: 1 }));
        assert_eq!(form.phase(), Phase::Submitting { attempt: 1 });
        assert!(form.is_submitting());
    }

    #[test]
    fn failed_attempt_schedules_backoff_then_next_attempt() {
        let now = Instant::now();
        let mut form = filled_form();
        form.update(Message::Submit, now);

        let event = form.update(
            Message::AttemptFinished {
                attempt: 1,
                success: false,
            },
            now,
        );
        match event {
            Event::ScheduleRetry { attempt, delay } => {
                assert_eq!(attempt, 2);
                assert_eq!(delay, Duration::from_secs(1));
            }
            other => panic!("expected ScheduleRetry, got {:?}", other),
        }

        let event = form.update(Message::RetryDelayElapsed { attempt: 2 }, now);
        assert!(matches!(event, Event::StartAttempt { attempt: 2 }));

        // Second failure backs off twice as long.
        let event = form.update(
            Message::AttemptFinished {
                attempt: 2,
                success: false,
            },
            now,
        );
        match event {
            Event::ScheduleRetry { attempt, delay } => {
                assert_eq!(attempt, 3);
                assert_eq!(delay, Duration::from_secs(2));
            }
            other => panic!("expected ScheduleRetry, got {:?}", other),
        }
    }

    #[test]
    fn final_failure_gives_up() {
        let now = Instant::now();
        let mut form = filled_form();
        form.update(Message::Submit, now);
        form.update(
            Message::AttemptFinished {
                attempt: 1,
                success: false,
            },
            now,
        );
        form.update(Message::RetryDelayElapsed { attempt: 2 }, now);
        form.update(
            Message::AttemptFinished {
                attempt: 2,
                success: false,
            },
            now,
        );
        form.update(Message::RetryDelayElapsed { attempt: 3 }, now);

        let event = form.update(
            Message::AttemptFinished {
                attempt: 3,
                success: false,
            },
            now,
        );
        assert!(matches!(event, Event::Failed));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn success_resets_fields_and_raises_banner() {
        let now = Instant::now();
        let mut form = filled_form();
        form.update(Message::Submit, now);

        let event = form.update(
            Message::AttemptFinished {
                attempt: 1,
                success: true,
            },
            now,
        );
        assert!(matches!(event, Event::Succeeded));
        assert!(form.shows_success_banner());
        assert!(form.field(Field::Name).value.is_empty());
        assert!(form.field(Field::Email).value.is_empty());

        form.tick(now + SUCCESS_BANNER);
        assert!(!form.shows_success_banner());
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn stale_attempt_completions_are_ignored() {
        let now = Instant::now();
        let mut form = filled_form();
        form.update(Message::Submit, now);

        // Completion for an attempt number that isn't in flight.
        let event = form.update(
            Message::AttemptFinished {
                attempt: 2,
                success: true,
            },
            now,
        );
        assert!(matches!(event, Event::None));
        assert_eq!(form.phase(), Phase::Submitting { attempt: 1 });

        // Retry wake-up without a matching backoff phase.
        let event = form.update(Message::RetryDelayElapsed { attempt: 2 }, now);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn submit_is_ignored_while_a_round_is_running() {
        let now = Instant::now();
        let mut form = filled_form();
        form.update(Message::Submit, now);

        let event = form.update(Message::Submit, now);
        assert!(matches!(event, Event::None));
        assert_eq!(form.phase(), Phase::Submitting { attempt: 1 });
    }

    #[test]
    fn contact_view_renders() {
        let i18n = I18n::default();
        let form = filled_form();
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
        });
    }
}
