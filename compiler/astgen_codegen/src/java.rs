//! A small model of Java declarations.
//!
//! Generators assemble a [`Klass`] tree and render it through a
//! [`SourceBuilder`]; nothing here knows about rules.

use crate::SourceBuilder;

/// Kind of a type declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KlassKind {
    Class,
    Interface,
}

/// A field with a one-line javadoc.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    brief: String,
    declaration: String,
    initializer: Vec<String>,
}

impl Field {
    /// `declaration` is everything before `=` or `;`, e.g. `private Fragment fragment`.
    pub fn new(brief: impl Into<String>, declaration: impl Into<String>) -> Self {
        Field {
            brief: brief.into(),
            declaration: declaration.into(),
            initializer: Vec::new(),
        }
    }

    /// Initializer expression. Extra lines continue the expression one level deeper.
    #[must_use]
    pub fn with_initializer(mut self, lines: Vec<String>) -> Self {
        self.initializer = lines;
        self
    }

    fn build(&self, out: &mut SourceBuilder) {
        write_javadoc(out, &[self.brief.as_str()]);
        match self.initializer.as_slice() {
            [] => out.writeln(&format!("{};", self.declaration)),
            [single] => out.writeln(&format!("{} = {single};", self.declaration)),
            [first, middle @ .., last] => {
                out.writeln(&format!("{} = {first}", self.declaration));
                out.indent();
                out.write_lines(middle);
                out.writeln(&format!("{last};"));
                out.dedent();
            }
        }
    }
}

/// A method or constructor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Method {
    /// Javadoc lines; `None` marks an `@Override`.
    doc: Option<Vec<String>>,
    signature: String,
    body: Vec<String>,
}

impl Method {
    /// A method implementing an interface method.
    pub fn overriding(signature: impl Into<String>) -> Self {
        Method {
            doc: None,
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    /// A method with its own javadoc, starting with `brief`.
    pub fn documented(brief: impl Into<String>, signature: impl Into<String>) -> Self {
        Method {
            doc: Some(vec![brief.into()]),
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    /// Append a javadoc tag line such as `@return The node`.
    #[must_use]
    pub fn with_doc(mut self, line: impl Into<String>) -> Self {
        if let Some(doc) = &mut self.doc {
            doc.push(line.into());
        }
        self
    }

    /// Body lines; nested blocks carry their own leading spaces.
    #[must_use]
    pub fn with_body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    fn build(&self, out: &mut SourceBuilder) {
        match &self.doc {
            Some(doc) => {
                let lines: Vec<&str> = doc.iter().map(String::as_str).collect();
                write_javadoc(out, &lines);
            }
            None => out.writeln("@Override"),
        }
        out.open(&self.signature);
        out.write_lines(&self.body);
        out.close();
    }
}

/// A class or interface declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Klass {
    kind: KlassKind,
    brief: String,
    version: String,
    modifiers: String,
    name: String,
    supertypes: Vec<String>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    nested: Vec<Klass>,
}

impl Klass {
    /// A `public` class.
    pub fn class(brief: impl Into<String>, name: impl Into<String>, version: &str) -> Self {
        Klass::new(KlassKind::Class, brief.into(), name.into(), version)
    }

    /// A `public` interface.
    pub fn interface(brief: impl Into<String>, name: impl Into<String>, version: &str) -> Self {
        Klass::new(KlassKind::Interface, brief.into(), name.into(), version)
    }

    fn new(kind: KlassKind, brief: String, name: String, version: &str) -> Self {
        Klass {
            kind,
            brief,
            version: version.to_string(),
            modifiers: "public".to_string(),
            name,
            supertypes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn kind(&self) -> KlassKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the modifiers, e.g. `private static final`.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    /// Implemented interfaces of a class, or extended interfaces of an interface.
    pub fn set_supertypes(&mut self, supertypes: Vec<String>) {
        self.supertypes = supertypes;
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn add_nested(&mut self, klass: Klass) {
        self.nested.push(klass);
    }

    pub fn build(&self, out: &mut SourceBuilder) {
        let since = format!("@since {}", self.version);
        write_javadoc(out, &[self.brief.as_str(), "", since.as_str()]);
        let keyword = match self.kind {
            KlassKind::Class => "class",
            KlassKind::Interface => "interface",
        };
        let mut header = format!("{} {keyword} {}", self.modifiers, self.name);
        if !self.supertypes.is_empty() {
            let relation = match self.kind {
                KlassKind::Class => "implements",
                KlassKind::Interface => "extends",
            };
            header.push_str(&format!(" {relation} {}", self.supertypes.join(", ")));
        }
        out.open(&header);
        let mut first = true;
        let mut separate = |out: &mut SourceBuilder| {
            if !first {
                out.newline();
            }
            first = false;
        };
        for field in &self.fields {
            separate(out);
            field.build(out);
        }
        for method in &self.methods {
            separate(out);
            method.build(out);
        }
        for klass in &self.nested {
            separate(out);
            klass.build(out);
        }
        out.close();
    }
}

/// Write a javadoc block; empty strings become bare ` *` lines.
fn write_javadoc(out: &mut SourceBuilder, lines: &[&str]) {
    out.writeln("/**");
    for line in lines {
        if line.is_empty() {
            out.writeln(" *");
        } else {
            out.writeln(&format!(" * {line}"));
        }
    }
    out.writeln(" */");
}
