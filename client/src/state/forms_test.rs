use super::*;
use gateway::model::ReservationStatus;

// =============================================================
// UserForm
// =============================================================

#[test]
fn new_user_requires_name_email_and_password() {
    let mut form = UserForm::for_new();
    assert_eq!(form.validate(false), Err("Name is required."));

    form.name = "Ana".to_owned();
    assert_eq!(form.validate(false), Err("Email and password are required."));

    form.email = "ana@example.com".to_owned();
    assert_eq!(form.validate(false), Err("Email and password are required."));

    form.password = "secret".to_owned();
    assert_eq!(form.validate(false), Ok(()));
}

#[test]
fn editing_only_requires_name() {
    let form = UserForm { name: "Ana".to_owned(), ..UserForm::default() };
    assert_eq!(form.validate(true), Ok(()));
}

#[test]
fn for_edit_prefills_from_profile() {
    let profile = Profile {
        id: "u1".to_owned(),
        email: Some("ana@example.com".to_owned()),
        name: Some("Ana".to_owned()),
        is_admin: true,
        created_at: String::new(),
    };
    let form = UserForm::for_edit(&profile);
    assert_eq!(form.name, "Ana");
    assert_eq!(form.email, "ana@example.com");
    assert!(form.password.is_empty());
    assert!(form.is_admin);
}

#[test]
fn patch_and_new_user_trim_fields() {
    let form = UserForm {
        name: "  Ana ".to_owned(),
        email: " ana@example.com ".to_owned(),
        password: " pw ".to_owned(),
        is_admin: false,
    };
    assert_eq!(form.patch(), ProfilePatch { name: Some("Ana".to_owned()), is_admin: Some(false) });

    let user = form.new_user();
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.password, " pw ");
}

// =============================================================
// ResourceForm
// =============================================================

#[test]
fn resource_form_requires_name() {
    let form = ResourceForm { name: "   ".to_owned(), ..ResourceForm::default() };
    assert_eq!(form.validate(), Err("Name is required."));
}

#[test]
fn resource_form_builds_insert() {
    let form = ResourceForm {
        name: " Projector ".to_owned(),
        kind: ResourceKind::Equipment,
        description: "HD ".to_owned(),
    };
    let row = form.validate().unwrap();
    assert_eq!(row.name, "Projector");
    assert_eq!(row.kind, ResourceKind::Equipment);
    assert_eq!(row.description, "HD");
}

// =============================================================
// ReservationForm
// =============================================================

#[test]
fn reservation_form_requires_resource_and_times() {
    let mut form = ReservationForm::for_resource(None);
    assert_eq!(form.validate("u1"), Err("Choose a resource."));

    form.resource_id = "r1".to_owned();
    form.start_time = "2024-03-01T09:00".to_owned();
    assert_eq!(form.validate("u1"), Err("Start and end time are required."));
}

#[test]
fn reservation_form_does_not_check_time_order() {
    let form = ReservationForm {
        resource_id: "r1".to_owned(),
        start_time: "2024-03-01T10:00".to_owned(),
        end_time: "2024-03-01T09:00".to_owned(),
    };
    let row = form.validate("u1").unwrap();
    assert_eq!(row.user_id, "u1");
    assert_eq!(row.status, ReservationStatus::Pending);
}

#[test]
fn for_resource_preselects() {
    let form = ReservationForm::for_resource(Some("r9".to_owned()));
    assert_eq!(form.resource_id, "r9");
    assert!(form.start_time.is_empty());
}
