//! Region tags: the named whitespace slots of each construct kind.
//!
//! Each construct kind has its own closed enumeration of slots. [`RegionTag`]
//! wraps them so descriptors share one key type. Variants are declared in
//! rule order, which is also the iteration order of a descriptor.

use std::fmt;

use bal_ir::ConstructKind;

/// Declares a per-kind region enum with stable string ids and its
/// conversion into [`RegionTag`].
macro_rules! regions {
    (
        $(#[$meta:meta])*
        $name:ident => $wrapper:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $id:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every slot of this kind, in rule order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Stable identifier, unique across all kinds.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }
        }

        impl From<$name> for RegionTag {
            #[inline]
            fn from(region: $name) -> Self {
                RegionTag::$wrapper(region)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

regions! {
    /// `import <package-name> [as <alias>];`
    ImportRegion => Import {
        KeywordToNameStart = "import-keyword-to-name-start",
        NameEndToDeclarationEnd = "import-name-end-to-declaration-end",
        /// Present only with an `as` clause.
        AsKeywordToAlias = "import-as-keyword-to-alias",
        /// Present only with an `as` clause.
        AliasToDeclarationEnd = "import-alias-to-declaration-end",
        DeclarationEndToNextToken = "import-declaration-end-to-next-token",
    }
}

regions! {
    /// `package <package-name>;`
    PackageRegion => Package {
        KeywordToNameStart = "package-keyword-to-name-start",
        NameEndToSemicolon = "package-name-end-to-semicolon",
        DeclarationEndToNextToken = "package-declaration-end-to-next-token",
    }
}

regions! {
    /// `service <identifier> { ... }`
    ServiceRegion => Service {
        KeywordToIdentifier = "service-keyword-to-identifier",
        IdentifierToBodyStart = "service-identifier-to-body-start",
        BodyStartToFirstChild = "service-body-start-to-first-child",
        EndToNextToken = "service-end-to-next-token",
    }
}

regions! {
    /// `resource <identifier> ( <params> ) { ... }`
    ResourceRegion => Resource {
        KeywordToIdentifier = "resource-keyword-to-identifier",
        IdentifierToParamListStart = "resource-identifier-to-param-list-start",
        ParamListStartToFirstParam = "resource-param-list-start-to-first-param",
        ParamListEndToBodyStart = "resource-param-list-end-to-body-start",
        BodyStartToFirstChild = "resource-body-start-to-first-child",
        EndToNextToken = "resource-end-to-next-token",
    }
}

regions! {
    /// `@<name-reference> { <attributes> }`
    AnnotationAttachmentRegion => AnnotationAttachment {
        AtKeywordToIdentifier = "annotation-attachment-at-keyword-to-identifier",
        IdentifierToAttributeListStart = "annotation-attachment-identifier-to-attribute-list-start",
        AttributeListStartToFirstAttribute =
            "annotation-attachment-attribute-list-start-to-first-attribute",
        EndToNextToken = "annotation-attachment-end-to-next-token",
    }
}

regions! {
    /// `<key> : <value>` inside an annotation attachment.
    AnnotationAttributeRegion => AnnotationAttribute {
        KeyStartToLastToken = "annotation-attribute-key-start-to-last-token",
        KeyToColon = "annotation-attribute-key-to-colon",
        ColonToValueStart = "annotation-attribute-colon-to-value-start",
    }
}

regions! {
    /// The value side of an annotation attribute.
    AnnotationValueRegion => AnnotationValue {
        ValueStartToLastToken = "annotation-value-start-to-last-token",
        ValueEndToNextToken = "annotation-value-end-to-next-token",
    }
}

regions! {
    /// `[native] function <identifier> ( <params> ) [(<returns>)] [throws <id>] [{ ... }]`
    FunctionRegion => Function {
        /// Present only on `native` definitions.
        NativeKeywordToFunctionKeyword = "function-native-keyword-to-function-keyword",
        FunctionKeywordToIdentifier = "function-keyword-to-identifier",
        IdentifierToParamListStart = "function-identifier-to-param-list-start",
        /// Present only with return parameters.
        ParamListEndToReturnParams = "function-param-list-end-to-return-params",
        /// Present only with a `throws` clause.
        ReturnParamsToThrowsKeyword = "function-return-params-to-throws-keyword",
        /// Present only with a `throws` clause.
        ThrowsKeywordToException = "function-throws-keyword-to-exception",
        /// Absent on `native` definitions.
        BodyStartToLastToken = "function-body-start-to-last-token",
        /// Absent on `native` definitions.
        BodyEndToNextToken = "function-body-end-to-next-token",
    }
}

regions! {
    /// `connector <identifier> ( <params> ) { ... }`
    ConnectorRegion => Connector {
        KeywordToIdentifier = "connector-keyword-to-identifier",
        IdentifierToParamListStart = "connector-identifier-to-param-list-start",
        ParamListEndToBodyStart = "connector-param-list-end-to-body-start",
        BodyEndToNextToken = "connector-body-end-to-next-token",
    }
}

/// A whitespace slot of any construct kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionTag {
    Import(ImportRegion),
    Package(PackageRegion),
    Service(ServiceRegion),
    Resource(ResourceRegion),
    AnnotationAttachment(AnnotationAttachmentRegion),
    AnnotationAttribute(AnnotationAttributeRegion),
    AnnotationValue(AnnotationValueRegion),
    Function(FunctionRegion),
    Connector(ConnectorRegion),
}

impl RegionTag {
    /// The construct kind this slot belongs to.
    pub const fn kind(self) -> ConstructKind {
        match self {
            RegionTag::Import(_) => ConstructKind::ImportDeclaration,
            RegionTag::Package(_) => ConstructKind::PackageDeclaration,
            RegionTag::Service(_) => ConstructKind::ServiceDefinition,
            RegionTag::Resource(_) => ConstructKind::ResourceDefinition,
            RegionTag::AnnotationAttachment(_) => ConstructKind::AnnotationAttachment,
            RegionTag::AnnotationAttribute(_) => ConstructKind::AnnotationAttribute,
            RegionTag::AnnotationValue(_) => ConstructKind::AnnotationAttributeValue,
            RegionTag::Function(_) => ConstructKind::FunctionDefinition,
            RegionTag::Connector(_) => ConstructKind::ConnectorDefinition,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RegionTag::Import(r) => r.as_str(),
            RegionTag::Package(r) => r.as_str(),
            RegionTag::Service(r) => r.as_str(),
            RegionTag::Resource(r) => r.as_str(),
            RegionTag::AnnotationAttachment(r) => r.as_str(),
            RegionTag::AnnotationAttribute(r) => r.as_str(),
            RegionTag::AnnotationValue(r) => r.as_str(),
            RegionTag::Function(r) => r.as_str(),
            RegionTag::Connector(r) => r.as_str(),
        }
    }

    /// All slots declared for `kind`, in rule order.
    pub fn all_for(kind: ConstructKind) -> Vec<RegionTag> {
        fn wrap<R: Copy + Into<RegionTag>>(regions: &[R]) -> Vec<RegionTag> {
            regions.iter().map(|&r| r.into()).collect()
        }
        match kind {
            ConstructKind::ImportDeclaration => wrap(ImportRegion::ALL),
            ConstructKind::PackageDeclaration => wrap(PackageRegion::ALL),
            ConstructKind::ServiceDefinition => wrap(ServiceRegion::ALL),
            ConstructKind::ResourceDefinition => wrap(ResourceRegion::ALL),
            ConstructKind::AnnotationAttachment => wrap(AnnotationAttachmentRegion::ALL),
            ConstructKind::AnnotationAttribute => wrap(AnnotationAttributeRegion::ALL),
            ConstructKind::AnnotationAttributeValue => wrap(AnnotationValueRegion::ALL),
            ConstructKind::FunctionDefinition => wrap(FunctionRegion::ALL),
            ConstructKind::ConnectorDefinition => wrap(ConnectorRegion::ALL),
        }
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
