//! The builtin function catalogue and the toy-box templates synthesised from it.

use std::collections::BTreeMap;

use crate::expr::dsl::{call, hint, list, var};
use crate::expr::model::Expr;

/// Reserved forms handled by the evaluator itself. They cannot be opened or stored as functions.
pub const SPECIAL_FUNCTIONS: [&str; 4] = ["If", "While", "Let", "Set"];

/// Whether `name` is one of [`SPECIAL_FUNCTIONS`].
pub fn is_special(name: &str) -> bool {
    SPECIAL_FUNCTIONS.contains(&name)
}

/// Toy-box tab a builtin is listed under.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Category {
    /// Control flow and bindings.
    General,
    /// Arithmetic.
    Maths,
    /// Strings.
    Text,
    /// Comparison and boolean logic.
    Logic,
    /// Input and output.
    Io,
}

/// Catalogue entry of one builtin.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BuiltinFn {
    /// Parameter names, in order.
    pub args: Vec<String>,
    /// Toy-box tab; `None` keeps it out of the toy box.
    pub category: Option<Category>,
    /// One-line description.
    pub help: String,
}

/// Builtin functions by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Builtins {
    entries: BTreeMap<String, BuiltinFn>,
}

impl Default for Builtins {
    fn default() -> Self {
        use Category::*;

        let mut b = Self::empty();
        b.define("Add", &["a", "b"], Some(Maths), "Add two numbers.");
        b.define("Sub", &["a", "b"], Some(Maths), "Subtract b from a.");
        b.define("Mul", &["a", "b"], Some(Maths), "Multiply two numbers.");
        b.define("Div", &["a", "b"], Some(Maths), "Divide a by b.");
        b.define("Mod", &["a", "b"], Some(Maths), "Remainder of a divided by b.");
        b.define("Concat", &["a", "b"], Some(Text), "Join two strings.");
        b.define("Length", &["text"], Some(Text), "Number of characters in text.");
        b.define("Eq", &["a", "b"], Some(Logic), "Whether a equals b.");
        b.define("Lt", &["a", "b"], Some(Logic), "Whether a is less than b.");
        b.define("Gt", &["a", "b"], Some(Logic), "Whether a is greater than b.");
        b.define("Not", &["value"], Some(Logic), "Negate a boolean.");
        b.define("And", &["a", "b"], Some(Logic), "Whether both are true.");
        b.define("Or", &["a", "b"], Some(Logic), "Whether either is true.");
        b.define("Print", &["value"], Some(Io), "Print a value.");
        b.define("Sleep", &["ms"], None, "Pause for a number of milliseconds.");
        b
    }
}

impl Builtins {
    /// Catalogue with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the entry for `name`.
    pub fn define(&mut self, name: &str, args: &[&str], category: Option<Category>, help: &str) {
        self.entries.insert(
            name.to_owned(),
            BuiltinFn {
                args: args.iter().map(|a| (*a).to_owned()).collect(),
                category,
                help: help.to_owned(),
            },
        );
    }

    /// Entry for `name`.
    pub fn get(&self, name: &str) -> Option<&BuiltinFn> {
        self.entries.get(name)
    }

    /// Whether `name` is a builtin.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BuiltinFn)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `Call(name, ..)` with one hinted blank per parameter, if `name` is a builtin.
    pub fn template(&self, name: &str) -> Option<Expr> {
        let f = self.get(name)?;
        Some(call(name, f.args.iter().map(hint)))
    }
}

fn special_template(name: &str) -> Option<Expr> {
    let template = match name {
        "If" => call("If", [hint("If True"), hint("If False")]),
        "While" => call("While", [hint("Condition"), hint("Do Something")]),
        "Let" => call("Let", [var("Variable"), hint("Value")]),
        "Set" => call("Set", [var("Variable"), hint("Value")]),
        _ => return None,
    };
    Some(template)
}

/// Call template for a special form or builtin called `name`.
pub fn call_template(builtins: &Builtins, name: &str) -> Option<Expr> {
    special_template(name).or_else(|| builtins.template(name))
}

/// Insertable templates per toy-box tab.
///
/// The general tab holds a two-line list and the special forms; every categorised builtin adds a
/// call with hinted blanks for its parameters.
pub fn toy_box(builtins: &Builtins) -> BTreeMap<Category, Vec<Expr>> {
    let mut tabs: BTreeMap<Category, Vec<Expr>> = BTreeMap::new();
    let general = tabs.entry(Category::General).or_default();
    general.push(list([hint("First Line"), hint("Second Line")]));
    general.extend(SPECIAL_FUNCTIONS.iter().filter_map(|name| special_template(name)));
    for (name, f) in builtins.iter() {
        let (Some(category), Some(template)) = (f.category, builtins.template(name)) else {
            continue;
        };
        tabs.entry(category).or_default().push(template);
    }
    tabs
}

#[cfg(test)]
#[path = "../../tests/unit/editor/builtins.rs"]
mod tests;
