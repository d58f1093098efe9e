//! Token kinds produced by the scanner.
//!
//! The numbering groups related tokens into contiguous ranges (punctuation,
//! assignment operators, reserved words, contextual keywords) so range checks
//! stay cheap. Composite node kinds live in the parser's `syntax_kind_ext`
//! and start above `SyntaxKind::LAST_TOKEN`.

use serde::Serialize;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,
    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    // Pseudo-literals
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    AtToken,
    QuestionQuestionToken,
    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    BarBarEqualsToken,
    AmpersandAmpersandEqualsToken,
    QuestionQuestionEqualsToken,
    CaretEqualsToken,
    // Identifiers
    Identifier,
    PrivateIdentifier,
    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,
    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    ReadonlyKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,
}

impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const LAST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::TemplateTail;
    /// Highest token kind; parser node kinds are numbered above this.
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::OfKeyword;

    /// Convert a raw `u16` kind back into a token kind.
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        if value <= SyntaxKind::LAST_TOKEN as u16 {
            // Discriminants are contiguous from 0 to LAST_TOKEN
            ALL_TOKENS.get(value as usize).copied()
        } else {
            None
        }
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self >= SyntaxKind::NumericLiteral && self <= SyntaxKind::NoSubstitutionTemplateLiteral
    }

    #[inline]
    pub fn is_template_token(self) -> bool {
        self >= Self::FIRST_TEMPLATE_TOKEN && self <= Self::LAST_TEMPLATE_TOKEN
    }
}

/// Every token kind in discriminant order.
const ALL_TOKENS: [SyntaxKind; SyntaxKind::LAST_TOKEN as usize + 1] = {
    use SyntaxKind::*;
    [
        Unknown,
        EndOfFileToken,
        NumericLiteral,
        BigIntLiteral,
        StringLiteral,
        RegularExpressionLiteral,
        NoSubstitutionTemplateLiteral,
        TemplateHead,
        TemplateMiddle,
        TemplateTail,
        OpenBraceToken,
        CloseBraceToken,
        OpenParenToken,
        CloseParenToken,
        OpenBracketToken,
        CloseBracketToken,
        DotToken,
        DotDotDotToken,
        SemicolonToken,
        CommaToken,
        QuestionDotToken,
        LessThanToken,
        GreaterThanToken,
        LessThanEqualsToken,
        GreaterThanEqualsToken,
        EqualsEqualsToken,
        ExclamationEqualsToken,
        EqualsEqualsEqualsToken,
        ExclamationEqualsEqualsToken,
        EqualsGreaterThanToken,
        PlusToken,
        MinusToken,
        AsteriskToken,
        AsteriskAsteriskToken,
        SlashToken,
        PercentToken,
        PlusPlusToken,
        MinusMinusToken,
        LessThanLessThanToken,
        GreaterThanGreaterThanToken,
        GreaterThanGreaterThanGreaterThanToken,
        AmpersandToken,
        BarToken,
        CaretToken,
        ExclamationToken,
        TildeToken,
        AmpersandAmpersandToken,
        BarBarToken,
        QuestionToken,
        ColonToken,
        AtToken,
        QuestionQuestionToken,
        EqualsToken,
        PlusEqualsToken,
        MinusEqualsToken,
        AsteriskEqualsToken,
        AsteriskAsteriskEqualsToken,
        SlashEqualsToken,
        PercentEqualsToken,
        LessThanLessThanEqualsToken,
        GreaterThanGreaterThanEqualsToken,
        GreaterThanGreaterThanGreaterThanEqualsToken,
        AmpersandEqualsToken,
        BarEqualsToken,
        BarBarEqualsToken,
        AmpersandAmpersandEqualsToken,
        QuestionQuestionEqualsToken,
        CaretEqualsToken,
        Identifier,
        PrivateIdentifier,
        BreakKeyword,
        CaseKeyword,
        CatchKeyword,
        ClassKeyword,
        ConstKeyword,
        ContinueKeyword,
        DebuggerKeyword,
        DefaultKeyword,
        DeleteKeyword,
        DoKeyword,
        ElseKeyword,
        EnumKeyword,
        ExportKeyword,
        ExtendsKeyword,
        FalseKeyword,
        FinallyKeyword,
        ForKeyword,
        FunctionKeyword,
        IfKeyword,
        ImportKeyword,
        InKeyword,
        InstanceOfKeyword,
        NewKeyword,
        NullKeyword,
        ReturnKeyword,
        SuperKeyword,
        SwitchKeyword,
        ThisKeyword,
        ThrowKeyword,
        TrueKeyword,
        TryKeyword,
        TypeOfKeyword,
        VarKeyword,
        VoidKeyword,
        WhileKeyword,
        WithKeyword,
        ImplementsKeyword,
        InterfaceKeyword,
        LetKeyword,
        PackageKeyword,
        PrivateKeyword,
        ProtectedKeyword,
        PublicKeyword,
        StaticKeyword,
        YieldKeyword,
        AbstractKeyword,
        AccessorKeyword,
        AsKeyword,
        AssertsKeyword,
        AnyKeyword,
        AsyncKeyword,
        AwaitKeyword,
        BooleanKeyword,
        ConstructorKeyword,
        DeclareKeyword,
        GetKeyword,
        InferKeyword,
        IsKeyword,
        KeyOfKeyword,
        ModuleKeyword,
        NamespaceKeyword,
        NeverKeyword,
        ReadonlyKeyword,
        NumberKeyword,
        ObjectKeyword,
        SatisfiesKeyword,
        SetKeyword,
        StringKeyword,
        SymbolKeyword,
        TypeKeyword,
        UndefinedKeyword,
        UniqueKeyword,
        UnknownKeyword,
        UsingKeyword,
        FromKeyword,
        GlobalKeyword,
        BigIntKeyword,
        OverrideKeyword,
        OfKeyword,
    ]
};

/// Whether the kind is any keyword (reserved or contextual).
#[inline]
pub fn is_keyword(kind: SyntaxKind) -> bool {
    kind >= SyntaxKind::FIRST_KEYWORD && kind <= SyntaxKind::LAST_KEYWORD
}

/// Whether the kind is a reserved word that can never be an identifier.
#[inline]
pub fn is_reserved_word(kind: SyntaxKind) -> bool {
    kind >= SyntaxKind::FIRST_RESERVED_WORD && kind <= SyntaxKind::LAST_RESERVED_WORD
}

/// Whether the kind is `=` or a compound assignment operator.
#[inline]
pub fn is_assignment_operator(kind: SyntaxKind) -> bool {
    kind >= SyntaxKind::FIRST_ASSIGNMENT && kind <= SyntaxKind::LAST_ASSIGNMENT
}

/// Map keyword text to its token kind.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    use SyntaxKind::*;
    // Keywords are 2..=11 ASCII lowercase letters
    let len = text.len();
    if !(2..=11).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }
    Some(match text {
        "abstract" => AbstractKeyword,
        "accessor" => AccessorKeyword,
        "any" => AnyKeyword,
        "as" => AsKeyword,
        "asserts" => AssertsKeyword,
        "async" => AsyncKeyword,
        "await" => AwaitKeyword,
        "bigint" => BigIntKeyword,
        "boolean" => BooleanKeyword,
        "break" => BreakKeyword,
        "case" => CaseKeyword,
        "catch" => CatchKeyword,
        "class" => ClassKeyword,
        "const" => ConstKeyword,
        "constructor" => ConstructorKeyword,
        "continue" => ContinueKeyword,
        "debugger" => DebuggerKeyword,
        "declare" => DeclareKeyword,
        "default" => DefaultKeyword,
        "delete" => DeleteKeyword,
        "do" => DoKeyword,
        "else" => ElseKeyword,
        "enum" => EnumKeyword,
        "export" => ExportKeyword,
        "extends" => ExtendsKeyword,
        "false" => FalseKeyword,
        "finally" => FinallyKeyword,
        "for" => ForKeyword,
        "from" => FromKeyword,
        "function" => FunctionKeyword,
        "get" => GetKeyword,
        "global" => GlobalKeyword,
        "if" => IfKeyword,
        "implements" => ImplementsKeyword,
        "import" => ImportKeyword,
        "in" => InKeyword,
        "infer" => InferKeyword,
        "instanceof" => InstanceOfKeyword,
        "interface" => InterfaceKeyword,
        "is" => IsKeyword,
        "keyof" => KeyOfKeyword,
        "let" => LetKeyword,
        "module" => ModuleKeyword,
        "namespace" => NamespaceKeyword,
        "never" => NeverKeyword,
        "new" => NewKeyword,
        "null" => NullKeyword,
        "number" => NumberKeyword,
        "object" => ObjectKeyword,
        "of" => OfKeyword,
        "override" => OverrideKeyword,
        "package" => PackageKeyword,
        "private" => PrivateKeyword,
        "protected" => ProtectedKeyword,
        "public" => PublicKeyword,
        "readonly" => ReadonlyKeyword,
        "return" => ReturnKeyword,
        "satisfies" => SatisfiesKeyword,
        "set" => SetKeyword,
        "static" => StaticKeyword,
        "string" => StringKeyword,
        "super" => SuperKeyword,
        "switch" => SwitchKeyword,
        "symbol" => SymbolKeyword,
        "this" => ThisKeyword,
        "throw" => ThrowKeyword,
        "true" => TrueKeyword,
        "try" => TryKeyword,
        "type" => TypeKeyword,
        "typeof" => TypeOfKeyword,
        "undefined" => UndefinedKeyword,
        "unique" => UniqueKeyword,
        "unknown" => UnknownKeyword,
        "using" => UsingKeyword,
        "var" => VarKeyword,
        "void" => VoidKeyword,
        "while" => WhileKeyword,
        "with" => WithKeyword,
        "yield" => YieldKeyword,
        _ => return None,
    })
}

/// Fixed source text of a punctuation or keyword token.
pub fn token_to_text(kind: SyntaxKind) -> Option<&'static str> {
    use SyntaxKind::*;
    Some(match kind {
        OpenBraceToken => "{",
        CloseBraceToken => "}",
        OpenParenToken => "(",
        CloseParenToken => ")",
        OpenBracketToken => "[",
        CloseBracketToken => "]",
        DotToken => ".",
        DotDotDotToken => "...",
        SemicolonToken => ";",
        CommaToken => ",",
        QuestionDotToken => "?.",
        LessThanToken => "<",
        GreaterThanToken => ">",
        LessThanEqualsToken => "<=",
        GreaterThanEqualsToken => ">=",
        EqualsEqualsToken => "==",
        ExclamationEqualsToken => "!=",
        EqualsEqualsEqualsToken => "===",
        ExclamationEqualsEqualsToken => "!==",
        EqualsGreaterThanToken => "=>",
        PlusToken => "+",
        MinusToken => "-",
        AsteriskToken => "*",
        AsteriskAsteriskToken => "**",
        SlashToken => "/",
        PercentToken => "%",
        PlusPlusToken => "++",
        MinusMinusToken => "--",
        LessThanLessThanToken => "<<",
        GreaterThanGreaterThanToken => ">>",
        GreaterThanGreaterThanGreaterThanToken => ">>>",
        AmpersandToken => "&",
        BarToken => "|",
        CaretToken => "^",
        ExclamationToken => "!",
        TildeToken => "~",
        AmpersandAmpersandToken => "&&",
        BarBarToken => "||",
        QuestionToken => "?",
        ColonToken => ":",
        AtToken => "@",
        QuestionQuestionToken => "??",
        EqualsToken => "=",
        PlusEqualsToken => "+=",
        MinusEqualsToken => "-=",
        AsteriskEqualsToken => "*=",
        AsteriskAsteriskEqualsToken => "**=",
        SlashEqualsToken => "/=",
        PercentEqualsToken => "%=",
        LessThanLessThanEqualsToken => "<<=",
        GreaterThanGreaterThanEqualsToken => ">>=",
        GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
        AmpersandEqualsToken => "&=",
        BarEqualsToken => "|=",
        BarBarEqualsToken => "||=",
        AmpersandAmpersandEqualsToken => "&&=",
        QuestionQuestionEqualsToken => "??=",
        CaretEqualsToken => "^=",
        BreakKeyword => "break",
        CaseKeyword => "case",
        CatchKeyword => "catch",
        ClassKeyword => "class",
        ConstKeyword => "const",
        ContinueKeyword => "continue",
        DebuggerKeyword => "debugger",
        DefaultKeyword => "default",
        DeleteKeyword => "delete",
        DoKeyword => "do",
        ElseKeyword => "else",
        EnumKeyword => "enum",
        ExportKeyword => "export",
        ExtendsKeyword => "extends",
        FalseKeyword => "false",
        FinallyKeyword => "finally",
        ForKeyword => "for",
        FunctionKeyword => "function",
        IfKeyword => "if",
        ImportKeyword => "import",
        InKeyword => "in",
        InstanceOfKeyword => "instanceof",
        NewKeyword => "new",
        NullKeyword => "null",
        ReturnKeyword => "return",
        SuperKeyword => "super",
        SwitchKeyword => "switch",
        ThisKeyword => "this",
        ThrowKeyword => "throw",
        TrueKeyword => "true",
        TryKeyword => "try",
        TypeOfKeyword => "typeof",
        VarKeyword => "var",
        VoidKeyword => "void",
        WhileKeyword => "while",
        WithKeyword => "with",
        ImplementsKeyword => "implements",
        InterfaceKeyword => "interface",
        LetKeyword => "let",
        PackageKeyword => "package",
        PrivateKeyword => "private",
        ProtectedKeyword => "protected",
        PublicKeyword => "public",
        StaticKeyword => "static",
        YieldKeyword => "yield",
        AbstractKeyword => "abstract",
        AccessorKeyword => "accessor",
        AsKeyword => "as",
        AssertsKeyword => "asserts",
        AnyKeyword => "any",
        AsyncKeyword => "async",
        AwaitKeyword => "await",
        BooleanKeyword => "boolean",
        ConstructorKeyword => "constructor",
        DeclareKeyword => "declare",
        GetKeyword => "get",
        InferKeyword => "infer",
        IsKeyword => "is",
        KeyOfKeyword => "keyof",
        ModuleKeyword => "module",
        NamespaceKeyword => "namespace",
        NeverKeyword => "never",
        ReadonlyKeyword => "readonly",
        NumberKeyword => "number",
        ObjectKeyword => "object",
        SatisfiesKeyword => "satisfies",
        SetKeyword => "set",
        StringKeyword => "string",
        SymbolKeyword => "symbol",
        TypeKeyword => "type",
        UndefinedKeyword => "undefined",
        UniqueKeyword => "unique",
        UnknownKeyword => "unknown",
        UsingKeyword => "using",
        FromKeyword => "from",
        GlobalKeyword => "global",
        BigIntKeyword => "bigint",
        OverrideKeyword => "override",
        OfKeyword => "of",
        _ => return None,
    })
}
