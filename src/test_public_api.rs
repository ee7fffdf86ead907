use gpui::IntoElement;

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn components_export_render_components() {
    assert_render_once::<crate::components::ProcessButton>();
}

#[test]
fn crate_root_reexports_core_types() {
    let element = crate::ElementHandle::new();
    let indicator = crate::ProcessIndicator::default();
    indicator.start(&element).expect("start must succeed");
    assert_eq!(
        element.process_state().expect("state must be readable"),
        crate::ProcessState::Processing
    );

    let form = crate::FormSurface::new()
        .field("a", "1")
        .trigger("#a", element.clone());
    assert!(form.find_trigger("#a").is_some());

    let target = crate::HtmlTarget::new();
    assert_eq!(target.html(), "");
}

#[test]
fn process_button_builds_into_element() {
    let element = crate::ElementHandle::new();
    let button = crate::components::ProcessButton::new("Send", element).with_id("send");
    let _ = button.into_any_element();
}
