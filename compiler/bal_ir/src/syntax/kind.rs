//! Construct kinds and named child fields.

use std::fmt;

/// Top-level construct kinds that carry whitespace regions.
///
/// Inner nodes a producer needs (package names, bodies, signatures, …) carry
/// no construct kind; they are only reachable through a [`ChildField`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructKind {
    ImportDeclaration,
    PackageDeclaration,
    ServiceDefinition,
    ResourceDefinition,
    AnnotationAttachment,
    AnnotationAttribute,
    AnnotationAttributeValue,
    FunctionDefinition,
    ConnectorDefinition,
}

impl ConstructKind {
    /// Every construct kind, in declaration order.
    pub const ALL: [ConstructKind; 9] = [
        ConstructKind::ImportDeclaration,
        ConstructKind::PackageDeclaration,
        ConstructKind::ServiceDefinition,
        ConstructKind::ResourceDefinition,
        ConstructKind::AnnotationAttachment,
        ConstructKind::AnnotationAttribute,
        ConstructKind::AnnotationAttributeValue,
        ConstructKind::FunctionDefinition,
        ConstructKind::ConnectorDefinition,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConstructKind::ImportDeclaration => "import declaration",
            ConstructKind::PackageDeclaration => "package declaration",
            ConstructKind::ServiceDefinition => "service definition",
            ConstructKind::ResourceDefinition => "resource definition",
            ConstructKind::AnnotationAttachment => "annotation attachment",
            ConstructKind::AnnotationAttribute => "annotation attribute",
            ConstructKind::AnnotationAttributeValue => "annotation attribute value",
            ConstructKind::FunctionDefinition => "function definition",
            ConstructKind::ConnectorDefinition => "connector definition",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named child accessors a producer may expose on a node.
///
/// Which fields a node carries depends on its kind; optional grammar
/// children are simply not registered when absent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChildField {
    /// Dotted package name of an import or package declaration.
    PackageName,
    /// `as` alias identifier of an import.
    Alias,
    /// Declared name of a service, resource, function, connector, or the key
    /// of an annotation attribute.
    Identifier,
    /// Annotation name reference after `@`.
    NameReference,
    /// Callable signature (identifier, parameters, returns, `throws` clause).
    Signature,
    ReturnParameters,
    /// Service, callable, or connector body including its braces.
    Body,
}

impl fmt::Display for ChildField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChildField::PackageName => "package name",
            ChildField::Alias => "alias",
            ChildField::Identifier => "identifier",
            ChildField::NameReference => "name reference",
            ChildField::Signature => "signature",
            ChildField::ReturnParameters => "return parameters",
            ChildField::Body => "body",
        })
    }
}
