//! Type descriptors: the caller-supplied model of the type to generate a
//! schema for.
//!
//! Rust has no runtime reflection, so the shape of a record is described
//! explicitly through the builder constructors on [`TypeDescriptor`].
//! Descriptors are shared via [`Arc`], and self-referential type graphs are
//! expressed with [`TypeDescriptor::recursive`], which hands the closure a
//! [`Weak`] handle to the composite under construction.

use std::sync::{Arc, Weak};

/// The closed set of recognized scalar identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Bool,
    Float32,
    Float64,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    /// A timestamp value, emitted as a `date-time` formatted string.
    Timestamp,
    /// An opaque identifier, emitted as a `uuid` formatted string.
    Uuid,
}

/// A possibly-cyclic edge to another descriptor.
#[derive(Debug, Clone)]
pub enum TypeRef {
    Strong(Arc<TypeDescriptor>),
    /// A back-edge into a composite currently under construction.
    Cycle(Weak<TypeDescriptor>),
}

impl TypeRef {
    /// Resolve the edge to its target descriptor.
    ///
    /// Returns `None` only for a `Cycle` edge whose target was dropped, which
    /// cannot happen for graphs built through [`TypeDescriptor::recursive`].
    pub fn resolve(&self) -> Option<Arc<TypeDescriptor>> {
        match self {
            TypeRef::Strong(ty) => Some(ty.clone()),
            TypeRef::Cycle(weak) => weak.upgrade(),
        }
    }
}

impl From<&Arc<TypeDescriptor>> for TypeRef {
    fn from(ty: &Arc<TypeDescriptor>) -> Self {
        TypeRef::Strong(ty.clone())
    }
}

/// The structural kind of a descriptor.
#[derive(Debug)]
pub enum TypeKind {
    Scalar(ScalarKind),
    Pointer(TypeRef),
    Sequence(TypeRef),
    Composite(Vec<FieldDescriptor>),
    /// A dictionary/map shape; always classified as a terminal `"object"`.
    Map,
    /// An "any" value with no schema constraint.
    Opaque,
    /// Control-flow-only shapes degrade to documentation placeholders.
    Channel,
    Function,
}

/// A named, typed, tag-annotated field of a composite type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The declared identifier, used as the property's documentation label.
    pub name: String,
    pub ty: TypeRef,
    /// Raw tag string: `"key"`, `"key,omitempty"`, `",omitempty"`, or `"-"`.
    pub tag: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, ty: &Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.into(),
            tag: None,
        }
    }

    pub fn with_tag(name: &str, ty: &Arc<TypeDescriptor>, tag: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.into(),
            tag: Some(tag.to_string()),
        }
    }
}

/// A description of one type: an optional name plus its structural kind.
#[derive(Debug)]
pub struct TypeDescriptor {
    /// The declared type name for named composites and scalar aliases.
    /// Anonymous shapes carry `None`.
    pub name: Option<String>,
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn scalar(kind: ScalarKind) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Scalar(kind),
        })
    }

    /// A scalar carrying a declared type name, so an alias-override table can
    /// reclassify it (see `SchemaGenerator::with_override`).
    pub fn named_scalar(name: &str, kind: ScalarKind) -> Arc<Self> {
        Arc::new(Self {
            name: Some(name.to_string()),
            kind: TypeKind::Scalar(kind),
        })
    }

    pub fn string() -> Arc<Self> {
        Self::scalar(ScalarKind::String)
    }

    pub fn boolean() -> Arc<Self> {
        Self::scalar(ScalarKind::Bool)
    }

    pub fn int() -> Arc<Self> {
        Self::scalar(ScalarKind::Int)
    }

    pub fn float64() -> Arc<Self> {
        Self::scalar(ScalarKind::Float64)
    }

    pub fn timestamp() -> Arc<Self> {
        Self::scalar(ScalarKind::Timestamp)
    }

    pub fn uuid() -> Arc<Self> {
        Self::scalar(ScalarKind::Uuid)
    }

    /// A raw byte blob. Classifies as a `"byte"`-formatted string, never as an
    /// array.
    pub fn bytes() -> Arc<Self> {
        Self::sequence(&Self::scalar(ScalarKind::Uint8))
    }

    /// An "any" value: the generated property carries no `type` constraint.
    pub fn opaque() -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Opaque,
        })
    }

    pub fn map() -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Map,
        })
    }

    pub fn channel() -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Channel,
        })
    }

    pub fn function() -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Function,
        })
    }

    pub fn pointer(to: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Pointer(to.into()),
        })
    }

    pub fn sequence(of: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Sequence(of.into()),
        })
    }

    /// A named composite with the given fields.
    pub fn composite(name: &str, fields: Vec<FieldDescriptor>) -> Arc<Self> {
        Arc::new(Self {
            name: Some(name.to_string()),
            kind: TypeKind::Composite(fields),
        })
    }

    /// An inline composite with no declared name. If hoisted into `$defs`, it
    /// receives a synthesized unique name.
    pub fn anonymous(fields: Vec<FieldDescriptor>) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Composite(fields),
        })
    }

    /// A named composite that may contain edges back to itself.
    ///
    /// The closure receives a [`Weak`] handle to the composite being built;
    /// wrap it with [`TypeDescriptor::self_pointer`] or
    /// [`TypeDescriptor::self_sequence`] to declare the recursive fields.
    ///
    /// ```
    /// use schematic::descriptor::{FieldDescriptor, TypeDescriptor};
    ///
    /// let node = TypeDescriptor::recursive("Node", |this| {
    ///     vec![
    ///         FieldDescriptor::new("Value", &TypeDescriptor::string()),
    ///         FieldDescriptor::new("Next", &TypeDescriptor::self_pointer(this)),
    ///     ]
    /// });
    /// assert!(node.is_composite());
    /// ```
    pub fn recursive<F>(name: &str, build: F) -> Arc<Self>
    where
        F: FnOnce(&Weak<Self>) -> Vec<FieldDescriptor>,
    {
        Arc::new_cyclic(|this| Self {
            name: Some(name.to_string()),
            kind: TypeKind::Composite(build(this)),
        })
    }

    /// A pointer back to the composite under construction in
    /// [`TypeDescriptor::recursive`].
    pub fn self_pointer(this: &Weak<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Pointer(TypeRef::Cycle(this.clone())),
        })
    }

    /// A sequence of the composite under construction in
    /// [`TypeDescriptor::recursive`].
    pub fn self_sequence(this: &Weak<Self>) -> Arc<Self> {
        Arc::new(Self {
            name: None,
            kind: TypeKind::Sequence(TypeRef::Cycle(this.clone())),
        })
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, TypeKind::Composite(_))
    }
}
