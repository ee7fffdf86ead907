use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use gpui::{
    Animation, AnimationExt, ClickEvent, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::process::ProcessState;
use crate::surface::{ElementHandle, ElementSnapshot};
use crate::theme::IndicatorPalette;

static BUTTON_ID_ALLOCATOR: AtomicU64 = AtomicU64::new(1);

type PressHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

/// Rendered control bound to an element handle: pulses while processing,
/// tints on error/success, drops opacity and swallows clicks while disabled.
#[derive(IntoElement)]
pub struct ProcessButton {
    id: SharedString,
    label: SharedString,
    element: ElementHandle,
    palette: IndicatorPalette,
    style: gpui::StyleRefinement,
    on_click: Option<PressHandler>,
}

impl ProcessButton {
    pub fn new(label: impl Into<SharedString>, element: ElementHandle) -> Self {
        let id = format!(
            "process-button-{}",
            BUTTON_ID_ALLOCATOR.fetch_add(1, Ordering::SeqCst)
        );
        Self {
            id: id.into(),
            label: label.into(),
            element,
            palette: IndicatorPalette::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn palette(mut self, palette: IndicatorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    fn surface_color(&self, snapshot: ElementSnapshot) -> Hsla {
        match snapshot.process {
            ProcessState::Idle => self.palette.idle_bg,
            ProcessState::Processing => self.palette.processing_bg,
            ProcessState::Errored => self.palette.error_bg,
            ProcessState::Succeeded => self.palette.success_bg,
        }
    }
}

impl RenderOnce for ProcessButton {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let snapshot = self.element.snapshot().unwrap_or_default();
        let bg = self.surface_color(snapshot);

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .gap_2()
            .px(px(16.0))
            .py(px(8.0))
            .rounded_md()
            .bg(bg)
            .text_color(self.palette.fg)
            .border_1()
            .border_color(bg);

        if snapshot.disabled {
            root = root.cursor_default().opacity(self.palette.disabled_opacity);
        } else if let Some(handler) = self.on_click.clone() {
            root = root
                .cursor_pointer()
                .on_click(move |event, window, cx| handler(event, window, cx));
        } else {
            root = root.cursor_default();
        }

        root = root.child(div().child(self.label.clone()));

        if snapshot.process == ProcessState::Processing {
            root = root.child(
                div()
                    .id(SharedString::from(format!("{}-pulse", self.id)))
                    .h(px(8.0))
                    .w(px(8.0))
                    .rounded_full()
                    .bg(self.palette.fg)
                    .with_animation(
                        SharedString::from(format!("{}-pulse-anim", self.id)),
                        Animation::new(Duration::from_millis(1200))
                            .repeat()
                            .with_easing(gpui::ease_in_out),
                        |this, delta| this.opacity(1.0 - delta * 0.6),
                    ),
            );
        }

        root
    }
}

impl gpui::Styled for ProcessButton {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
