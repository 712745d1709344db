//! Context Nodes
//!
//! Typed payloads for every kind of recognized linguistic fragment, the
//! static registry of kinds, and typed handles into a [`ContextGraph`].
//!
//! Kinds form a closed sum type ([`ContextKind`]). Specializations are
//! expressed through [`ContextTag::is_a`]: a color is an attribute and a
//! frequency is a modifier, so they are accepted wherever their base kind is.
//!
//! [`ContextGraph`]: crate::graph::ContextGraph

pub mod frequency;
pub mod group;
pub mod node;
pub mod position;
pub mod question;
pub mod variants;

pub use frequency::{FrequencyContext, FrequencyType, RelationshipType, STRENGTH_STEP};
pub use group::{Group, GroupContext, MemberSet};
pub use node::{ContextId, ContextNode};
pub use position::{Point3D, PositionalContext};
pub use question::{QuestionContext, QuestionKind};
pub use variants::{
    ActionContext, AttributeContext, ColorContext, IntentContext, ModifierContext,
    SubjectContext, TextRecognitionContext,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Registry of context kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextTag {
    Intent,
    Subject,
    Action,
    Attribute,
    Color,
    Modifier,
    Frequency,
    Positional,
    Question,
    TextRecognition,
    Group,
}

impl ContextTag {
    pub fn name(self) -> &'static str {
        match self {
            ContextTag::Intent => "Intent",
            ContextTag::Subject => "Subject",
            ContextTag::Action => "Action",
            ContextTag::Attribute => "Attribute",
            ContextTag::Color => "Color",
            ContextTag::Modifier => "Modifier",
            ContextTag::Frequency => "Frequency",
            ContextTag::Positional => "Positional",
            ContextTag::Question => "Question",
            ContextTag::TextRecognition => "TextRecognition",
            ContextTag::Group => "Group",
        }
    }

    /// True when a context of this kind may stand in for `base`.
    pub fn is_a(self, base: ContextTag) -> bool {
        self == base
            || matches!(
                (self, base),
                (ContextTag::Color, ContextTag::Attribute)
                    | (ContextTag::Frequency, ContextTag::Modifier)
            )
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a context node.
#[derive(Debug, Clone)]
pub enum ContextKind {
    Intent(IntentContext),
    Subject(SubjectContext),
    Action(ActionContext),
    Attribute(AttributeContext),
    Color(ColorContext),
    Modifier(ModifierContext),
    Frequency(FrequencyContext),
    Positional(PositionalContext),
    Question(QuestionContext),
    TextRecognition(TextRecognitionContext),
    Group(GroupContext),
}

impl ContextKind {
    pub fn tag(&self) -> ContextTag {
        match self {
            ContextKind::Intent(_) => ContextTag::Intent,
            ContextKind::Subject(_) => ContextTag::Subject,
            ContextKind::Action(_) => ContextTag::Action,
            ContextKind::Attribute(_) => ContextTag::Attribute,
            ContextKind::Color(_) => ContextTag::Color,
            ContextKind::Modifier(_) => ContextTag::Modifier,
            ContextKind::Frequency(_) => ContextTag::Frequency,
            ContextKind::Positional(_) => ContextTag::Positional,
            ContextKind::Question(_) => ContextTag::Question,
            ContextKind::TextRecognition(_) => ContextTag::TextRecognition,
            ContextKind::Group(_) => ContextTag::Group,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ContextKind::Group(_))
    }
}

/// A type that can select context nodes by kind.
///
/// Implemented by every payload type, by [`Group<T>`] for groups holding `T`,
/// and by [`AnyContext`].
pub trait ContextVariant: 'static {
    fn accepts(kind: &ContextKind) -> bool;
}

/// A concrete payload stored in a context node.
pub trait ContextPayload: ContextVariant + Sized {
    const TAG: ContextTag;

    fn into_kind(self) -> ContextKind;

    /// Borrow this payload out of a node kind, including from specializations.
    fn view(kind: &ContextKind) -> Option<&Self>;

    fn view_mut(kind: &mut ContextKind) -> Option<&mut Self>;
}

/// Selects every context, groups included.
#[derive(Debug, Clone, Copy)]
pub struct AnyContext;

impl ContextVariant for AnyContext {
    fn accepts(_kind: &ContextKind) -> bool {
        true
    }
}

macro_rules! exact_payload {
    ($ty:ty, $variant:ident) => {
        impl ContextVariant for $ty {
            fn accepts(kind: &ContextKind) -> bool {
                kind.tag().is_a(ContextTag::$variant)
            }
        }

        impl ContextPayload for $ty {
            const TAG: ContextTag = ContextTag::$variant;

            fn into_kind(self) -> ContextKind {
                ContextKind::$variant(self)
            }

            fn view(kind: &ContextKind) -> Option<&Self> {
                match kind {
                    ContextKind::$variant(payload) => Some(payload),
                    _ => None,
                }
            }

            fn view_mut(kind: &mut ContextKind) -> Option<&mut Self> {
                match kind {
                    ContextKind::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }
    };
}

exact_payload!(IntentContext, Intent);
exact_payload!(SubjectContext, Subject);
exact_payload!(ActionContext, Action);
exact_payload!(ColorContext, Color);
exact_payload!(FrequencyContext, Frequency);
exact_payload!(PositionalContext, Positional);
exact_payload!(QuestionContext, Question);
exact_payload!(TextRecognitionContext, TextRecognition);

impl ContextVariant for AttributeContext {
    fn accepts(kind: &ContextKind) -> bool {
        kind.tag().is_a(ContextTag::Attribute)
    }
}

impl ContextPayload for AttributeContext {
    const TAG: ContextTag = ContextTag::Attribute;

    fn into_kind(self) -> ContextKind {
        ContextKind::Attribute(self)
    }

    fn view(kind: &ContextKind) -> Option<&Self> {
        match kind {
            ContextKind::Attribute(attribute) => Some(attribute),
            ContextKind::Color(color) => Some(color.as_attribute()),
            _ => None,
        }
    }

    fn view_mut(kind: &mut ContextKind) -> Option<&mut Self> {
        match kind {
            ContextKind::Attribute(attribute) => Some(attribute),
            ContextKind::Color(color) => Some(color.as_attribute_mut()),
            _ => None,
        }
    }
}

impl ContextVariant for ModifierContext {
    fn accepts(kind: &ContextKind) -> bool {
        kind.tag().is_a(ContextTag::Modifier)
    }
}

impl ContextPayload for ModifierContext {
    const TAG: ContextTag = ContextTag::Modifier;

    fn into_kind(self) -> ContextKind {
        ContextKind::Modifier(self)
    }

    fn view(kind: &ContextKind) -> Option<&Self> {
        match kind {
            ContextKind::Modifier(modifier) => Some(modifier),
            ContextKind::Frequency(frequency) => Some(frequency.as_modifier()),
            _ => None,
        }
    }

    fn view_mut(kind: &mut ContextKind) -> Option<&mut Self> {
        match kind {
            ContextKind::Modifier(modifier) => Some(modifier),
            ContextKind::Frequency(frequency) => Some(frequency.as_modifier_mut()),
            _ => None,
        }
    }
}

/// Typed, copyable reference to a node in a [`ContextGraph`].
///
/// A handle does not keep its node alive; once the node is discarded every
/// lookup through the handle returns `None`.
///
/// [`ContextGraph`]: crate::graph::ContextGraph
pub struct Handle<T> {
    id: ContextId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(id: ContextId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.id)
    }
}

impl<T> From<Handle<T>> for ContextId {
    fn from(handle: Handle<T>) -> Self {
        handle.id
    }
}
