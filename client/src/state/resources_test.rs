use super::*;

fn resource(id: &str, kind: ResourceKind) -> Resource {
    Resource {
        id: id.to_owned(),
        name: format!("Resource {id}"),
        kind,
        description: String::new(),
        created_at: String::new(),
    }
}

#[test]
fn default_filter_is_all() {
    assert_eq!(ResourceFilter::default(), ResourceFilter::All);
}

#[test]
fn visible_keeps_order_and_filters_by_kind() {
    let resources = vec![
        resource("a", ResourceKind::Room),
        resource("b", ResourceKind::Equipment),
        resource("c", ResourceKind::Room),
    ];

    let ids = |filter: ResourceFilter| {
        filter
            .visible(&resources)
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(ResourceFilter::All), vec!["a", "b", "c"]);
    assert_eq!(ids(ResourceFilter::Room), vec!["a", "c"]);
    assert_eq!(ids(ResourceFilter::Equipment), vec!["b"]);
}

#[test]
fn visible_on_empty_list_is_empty() {
    assert!(ResourceFilter::Room.visible(&[]).is_empty());
}

#[test]
fn labels_are_distinct() {
    let labels = ResourceFilter::ALL.map(ResourceFilter::label);
    assert_eq!(labels, ["All", "Rooms", "Equipment"]);
}
