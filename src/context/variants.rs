//! Payload-only context variants

use crate::lexicon::DictionaryItem;

/// Conversational-turn aggregation root. Carries no payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentContext;

/// A tangible or intangible referent under discussion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectContext {
    name: DictionaryItem,
}

impl SubjectContext {
    pub fn new(name: DictionaryItem) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &DictionaryItem {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    action: DictionaryItem,
}

impl ActionContext {
    pub fn new(action: DictionaryItem) -> Self {
        Self { action }
    }

    pub fn action(&self) -> &DictionaryItem {
        &self.action
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeContext {
    attribute: DictionaryItem,
}

impl AttributeContext {
    pub fn new(attribute: DictionaryItem) -> Self {
        Self { attribute }
    }

    pub fn attribute(&self) -> &DictionaryItem {
        &self.attribute
    }
}

/// Attribute built from a color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorContext {
    attribute: AttributeContext,
}

impl ColorContext {
    pub fn new(color: DictionaryItem) -> Self {
        Self {
            attribute: AttributeContext::new(color),
        }
    }

    pub fn color(&self) -> &DictionaryItem {
        self.attribute.attribute()
    }

    pub fn as_attribute(&self) -> &AttributeContext {
        &self.attribute
    }

    pub(crate) fn as_attribute_mut(&mut self) -> &mut AttributeContext {
        &mut self.attribute
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierContext {
    modifier: DictionaryItem,
}

impl ModifierContext {
    pub fn new(modifier: DictionaryItem) -> Self {
        Self { modifier }
    }

    pub fn modifier(&self) -> &DictionaryItem {
        &self.modifier
    }
}

/// Raw text recognized as a fragment before it was classified further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecognitionContext {
    text: String,
}

impl TextRecognitionContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
