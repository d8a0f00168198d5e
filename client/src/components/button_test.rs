use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), false),
        "btn btn--primary btn--md"
    );
}

#[test]
fn full_width_adds_modifier() {
    assert_eq!(
        button_class(ButtonVariant::Danger, ButtonSize::Sm, true),
        "btn btn--danger btn--sm btn--full"
    );
}

#[test]
fn warning_large() {
    assert_eq!(button_class(ButtonVariant::Warning, ButtonSize::Lg, false), "btn btn--warning btn--lg");
}
