use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::SharedString;

use crate::process::{ProcessError, ProcessResult, ProcessState};

pub(crate) struct ElementVisual {
    pub(crate) process: ProcessState,
    pub(crate) disabled: bool,
    pub(crate) clear_epoch: u64,
}

/// Shared handle to one clickable control's transient visual state.
#[derive(Clone)]
pub struct ElementHandle {
    visual: Arc<RwLock<ElementVisual>>,
}

impl ElementHandle {
    pub fn new() -> Self {
        Self {
            visual: Arc::new(RwLock::new(ElementVisual {
                process: ProcessState::Idle,
                disabled: false,
                clear_epoch: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> ProcessResult<ElementSnapshot> {
        let visual = self.read("creating element snapshot")?;
        Ok(ElementSnapshot {
            process: visual.process,
            disabled: visual.disabled,
        })
    }

    pub fn process_state(&self) -> ProcessResult<ProcessState> {
        Ok(self.read("reading process state")?.process)
    }

    pub fn is_disabled(&self) -> ProcessResult<bool> {
        Ok(self.read("reading disabled flag")?.disabled)
    }

    pub(crate) fn read(
        &self,
        context: &'static str,
    ) -> ProcessResult<RwLockReadGuard<'_, ElementVisual>> {
        self.visual
            .read()
            .map_err(|_| ProcessError::StatePoisoned(context))
    }

    pub(crate) fn write(
        &self,
        context: &'static str,
    ) -> ProcessResult<RwLockWriteGuard<'_, ElementVisual>> {
        self.visual
            .write()
            .map_err(|_| ProcessError::StatePoisoned(context))
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ElementSnapshot {
    pub process: ProcessState,
    pub disabled: bool,
}

impl Default for ElementSnapshot {
    fn default() -> Self {
        Self {
            process: ProcessState::Idle,
            disabled: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormField {
    pub name: SharedString,
    pub value: SharedString,
}

impl FormField {
    pub fn new(name: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The form-like container: the field values serialized into the request
/// payload plus the triggers addressable by selector.
pub struct FormSurface {
    fields: Vec<FormField>,
    triggers: Vec<(SharedString, ElementHandle)>,
}

impl FormSurface {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.fields.push(FormField::new(name, value));
        self
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<SharedString>) {
        let value = value.into();
        if let Some(field) = self
            .fields
            .iter_mut()
            .find(|field| field.name.as_ref() == name)
        {
            field.value = value;
        } else {
            self.fields.push(FormField::new(name.to_owned(), value));
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn trigger(mut self, selector: impl Into<SharedString>, element: ElementHandle) -> Self {
        self.triggers.push((selector.into(), element));
        self
    }

    pub fn find_trigger(&self, selector: &str) -> Option<ElementHandle> {
        self.triggers
            .iter()
            .find(|(registered, _)| registered.as_ref() == selector)
            .map(|(_, element)| element.clone())
    }
}

impl Default for FormSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination region whose contents are overwritten with returned markup.
#[derive(Clone)]
pub struct HtmlTarget {
    contents: Arc<RwLock<SharedString>>,
}

impl HtmlTarget {
    pub fn new() -> Self {
        Self {
            contents: Arc::new(RwLock::new(SharedString::default())),
        }
    }

    pub fn replace(&self, html: impl Into<SharedString>) {
        let mut contents = match self.contents.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *contents = html.into();
    }

    pub fn html(&self) -> SharedString {
        let contents = match self.contents.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        contents.clone()
    }
}

impl Default for HtmlTarget {
    fn default() -> Self {
        Self::new()
    }
}
