//! The region rule table.
//!
//! One ordered rule list per construct kind declares which token boundary
//! anchors each whitespace slot and which side of it to collect. This table
//! is the single source of truth: supporting a new construct kind means
//! adding a list here, not new procedural code.
//!
//! Function definitions have two lists. A `native` definition has no body,
//! so its list drops both body tags and adds the slot after `native`.

use bal_ir::{Child, ChildField, ConstructKind, NodeData, TokenStream};

use crate::region::{
    AnnotationAttachmentRegion as Attach, AnnotationAttributeRegion as Attr,
    AnnotationValueRegion as Value, ConnectorRegion as Connector, FunctionRegion as Function,
    ImportRegion as Import, PackageRegion as Package, ResourceRegion as Resource,
    ServiceRegion as Service,
};
use crate::{Direction, RegionTag, Selector, TriviaError};
use Selector::{ChildStart, ChildStop, ChildTokenWithText, NodeStart, NodeStop, TokenWithText};

/// Literal markers looked up by text because the grammar binds no field to
/// them.
pub mod keywords {
    pub const RESOURCE: &str = "resource";
    pub const OPEN_PAREN: &str = "(";
    pub const CLOSE_PAREN: &str = ")";
    pub const AS: &str = "as";
    pub const OPEN_BRACE: &str = "{";
    pub const COLON: &str = ":";
    pub const NATIVE: &str = "native";
    pub const THROWS: &str = "throws";
}

/// One whitespace slot: where its anchor is and which side to collect.
///
/// An `optional` slot belongs to a grammar part that may be missing, and an
/// unresolved anchor just leaves it out. A mandatory slot whose anchor does
/// not resolve means the tree is malformed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rule {
    pub tag: RegionTag,
    pub selector: Selector,
    pub direction: Direction,
    pub optional: bool,
}

impl Rule {
    const fn new(tag: RegionTag, selector: Selector, direction: Direction, optional: bool) -> Self {
        Rule {
            tag,
            selector,
            direction,
            optional,
        }
    }

    /// Collect the trivia after the anchor.
    pub const fn right(tag: RegionTag, selector: Selector) -> Self {
        Rule::new(tag, selector, Direction::Right, false)
    }

    /// Collect the trivia before the anchor.
    pub const fn left(tag: RegionTag, selector: Selector) -> Self {
        Rule::new(tag, selector, Direction::Left, false)
    }

    /// Like [`Rule::right`], for a slot of an optional grammar part.
    pub const fn right_opt(tag: RegionTag, selector: Selector) -> Self {
        Rule::new(tag, selector, Direction::Right, true)
    }

    /// Like [`Rule::left`], for a slot of an optional grammar part.
    pub const fn left_opt(tag: RegionTag, selector: Selector) -> Self {
        Rule::new(tag, selector, Direction::Left, true)
    }
}

/// Which rule list applies to a node whose kind has more than one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RuleVariant {
    #[default]
    Plain,
    /// The definition's first child is the `native` qualifier.
    Native,
}

impl RuleVariant {
    /// Compute the discriminant for one node.
    ///
    /// Only function definitions can be `native`; every other kind is
    /// `Plain`.
    pub fn detect(
        kind: ConstructKind,
        stream: &TokenStream,
        node: &NodeData,
    ) -> Result<RuleVariant, TriviaError> {
        if kind != ConstructKind::FunctionDefinition {
            return Ok(RuleVariant::Plain);
        }
        let Some(&Child::Token(first)) = node.children().first() else {
            return Ok(RuleVariant::Plain);
        };
        let token = stream.get(first).ok_or(TriviaError::TokenOutOfBounds {
            index: first,
            len: stream.len(),
        })?;
        Ok(if token.text == keywords::NATIVE {
            RuleVariant::Native
        } else {
            RuleVariant::Plain
        })
    }
}

/// The rule list for `kind` under `variant`.
pub fn rules_for(kind: ConstructKind, variant: RuleVariant) -> &'static [Rule] {
    match (kind, variant) {
        (ConstructKind::ImportDeclaration, _) => IMPORT,
        (ConstructKind::PackageDeclaration, _) => PACKAGE,
        (ConstructKind::ServiceDefinition, _) => SERVICE,
        (ConstructKind::ResourceDefinition, _) => RESOURCE,
        (ConstructKind::AnnotationAttachment, _) => ANNOTATION_ATTACHMENT,
        (ConstructKind::AnnotationAttribute, _) => ANNOTATION_ATTRIBUTE,
        (ConstructKind::AnnotationAttributeValue, _) => ANNOTATION_VALUE,
        (ConstructKind::FunctionDefinition, RuleVariant::Plain) => FUNCTION,
        (ConstructKind::FunctionDefinition, RuleVariant::Native) => NATIVE_FUNCTION,
        (ConstructKind::ConnectorDefinition, _) => CONNECTOR,
    }
}

static IMPORT: &[Rule] = &[
    Rule::right(RegionTag::Import(Import::KeywordToNameStart), NodeStart),
    Rule::right(
        RegionTag::Import(Import::NameEndToDeclarationEnd),
        ChildStop(ChildField::PackageName),
    ),
    Rule::right_opt(
        RegionTag::Import(Import::AsKeywordToAlias),
        TokenWithText(keywords::AS),
    ),
    Rule::right_opt(
        RegionTag::Import(Import::AliasToDeclarationEnd),
        ChildStop(ChildField::Alias),
    ),
    Rule::right(RegionTag::Import(Import::DeclarationEndToNextToken), NodeStop),
];

static PACKAGE: &[Rule] = &[
    Rule::right(RegionTag::Package(Package::KeywordToNameStart), NodeStart),
    Rule::right(
        RegionTag::Package(Package::NameEndToSemicolon),
        ChildStop(ChildField::PackageName),
    ),
    Rule::right(RegionTag::Package(Package::DeclarationEndToNextToken), NodeStop),
];

static SERVICE: &[Rule] = &[
    Rule::right(RegionTag::Service(Service::KeywordToIdentifier), NodeStart),
    Rule::right(
        RegionTag::Service(Service::IdentifierToBodyStart),
        ChildStop(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::Service(Service::BodyStartToFirstChild),
        ChildStart(ChildField::Body),
    ),
    Rule::right(
        RegionTag::Service(Service::EndToNextToken),
        ChildStop(ChildField::Body),
    ),
];

// Resources may be preceded by annotations, so the keyword is found by text
// rather than taken from the node start.
static RESOURCE: &[Rule] = &[
    Rule::right(
        RegionTag::Resource(Resource::KeywordToIdentifier),
        TokenWithText(keywords::RESOURCE),
    ),
    Rule::right(
        RegionTag::Resource(Resource::IdentifierToParamListStart),
        ChildStop(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::Resource(Resource::ParamListStartToFirstParam),
        TokenWithText(keywords::OPEN_PAREN),
    ),
    Rule::right(
        RegionTag::Resource(Resource::ParamListEndToBodyStart),
        TokenWithText(keywords::CLOSE_PAREN),
    ),
    Rule::right(
        RegionTag::Resource(Resource::BodyStartToFirstChild),
        ChildStart(ChildField::Body),
    ),
    Rule::right(
        RegionTag::Resource(Resource::EndToNextToken),
        ChildStop(ChildField::Body),
    ),
];

static ANNOTATION_ATTACHMENT: &[Rule] = &[
    Rule::right(
        RegionTag::AnnotationAttachment(Attach::AtKeywordToIdentifier),
        NodeStart,
    ),
    Rule::right(
        RegionTag::AnnotationAttachment(Attach::IdentifierToAttributeListStart),
        ChildStop(ChildField::NameReference),
    ),
    Rule::right(
        RegionTag::AnnotationAttachment(Attach::AttributeListStartToFirstAttribute),
        TokenWithText(keywords::OPEN_BRACE),
    ),
    Rule::right(
        RegionTag::AnnotationAttachment(Attach::EndToNextToken),
        NodeStop,
    ),
];

static ANNOTATION_ATTRIBUTE: &[Rule] = &[
    Rule::left(
        RegionTag::AnnotationAttribute(Attr::KeyStartToLastToken),
        ChildStart(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::AnnotationAttribute(Attr::KeyToColon),
        ChildStop(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::AnnotationAttribute(Attr::ColonToValueStart),
        TokenWithText(keywords::COLON),
    ),
];

static ANNOTATION_VALUE: &[Rule] = &[
    Rule::left(
        RegionTag::AnnotationValue(Value::ValueStartToLastToken),
        NodeStart,
    ),
    Rule::right(
        RegionTag::AnnotationValue(Value::ValueEndToNextToken),
        NodeStop,
    ),
];

static FUNCTION: &[Rule] = &[
    Rule::left(
        RegionTag::Function(Function::FunctionKeywordToIdentifier),
        ChildStart(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::Function(Function::IdentifierToParamListStart),
        ChildStop(ChildField::Identifier),
    ),
    Rule::left_opt(
        RegionTag::Function(Function::ParamListEndToReturnParams),
        ChildStart(ChildField::ReturnParameters),
    ),
    Rule::left_opt(
        RegionTag::Function(Function::ReturnParamsToThrowsKeyword),
        ChildTokenWithText(ChildField::Signature, keywords::THROWS),
    ),
    Rule::right_opt(
        RegionTag::Function(Function::ThrowsKeywordToException),
        ChildTokenWithText(ChildField::Signature, keywords::THROWS),
    ),
    Rule::left(
        RegionTag::Function(Function::BodyStartToLastToken),
        ChildStart(ChildField::Body),
    ),
    Rule::right(
        RegionTag::Function(Function::BodyEndToNextToken),
        ChildStop(ChildField::Body),
    ),
];

static NATIVE_FUNCTION: &[Rule] = &[
    Rule::right(
        RegionTag::Function(Function::NativeKeywordToFunctionKeyword),
        TokenWithText(keywords::NATIVE),
    ),
    Rule::left(
        RegionTag::Function(Function::FunctionKeywordToIdentifier),
        ChildStart(ChildField::Identifier),
    ),
    Rule::right(
        RegionTag::Function(Function::IdentifierToParamListStart),
        ChildStop(ChildField::Identifier),
    ),
    Rule::left_opt(
        RegionTag::Function(Function::ParamListEndToReturnParams),
        ChildStart(ChildField::ReturnParameters),
    ),
    Rule::left_opt(
        RegionTag::Function(Function::ReturnParamsToThrowsKeyword),
        ChildTokenWithText(ChildField::Signature, keywords::THROWS),
    ),
    Rule::right_opt(
        RegionTag::Function(Function::ThrowsKeywordToException),
        ChildTokenWithText(ChildField::Signature, keywords::THROWS),
    ),
];

static CONNECTOR: &[Rule] = &[
    Rule::right(
        RegionTag::Connector(Connector::KeywordToIdentifier),
        NodeStart,
    ),
    Rule::right(
        RegionTag::Connector(Connector::IdentifierToParamListStart),
        ChildStop(ChildField::Identifier),
    ),
    Rule::left(
        RegionTag::Connector(Connector::ParamListEndToBodyStart),
        ChildStart(ChildField::Body),
    ),
    Rule::right(
        RegionTag::Connector(Connector::BodyEndToNextToken),
        ChildStop(ChildField::Body),
    ),
];
