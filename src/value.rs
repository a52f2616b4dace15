/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the PAWX programming language project.
 *
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::stmt::Stmt;

/// A user-defined method: its formal parameter names and its body.
///
/// `self` is never listed in `params` — it is bound implicitly by the
/// calling convention when a method is dispatched on an instance.
#[derive(Debug, Clone)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Rc<Vec<Stmt>>,
}

/// A class descriptor: its own method table and an optional parent link.
///
/// Method resolution walks the parent chain; fields live on instances, not
/// on the class, so `ClassDef` itself is immutable once built.
#[derive(Debug)]
pub struct ClassDef {
    pub name: String,
    pub methods: HashMap<String, MethodDef>,
    pub parent: Option<Rc<ClassDef>>,
}

impl ClassDef {
    /// Walks this class and its ancestors looking for a method by name.
    /// Returns the class that actually owns the method alongside it, since
    /// callers need the owning class's name for error messages.
    pub fn get_method(&self, name: &str) -> Option<&MethodDef> {
        if let Some(m) = self.methods.get(name) {
            return Some(m);
        }
        self.parent.as_deref().and_then(|p| p.get_method(name))
    }

    pub fn is_subclass_of(&self, other: &str) -> bool {
        if self.name == other {
            return true;
        }
        self.parent.as_deref().map_or(false, |p| p.is_subclass_of(other))
    }
}

/// A live instance of a class: shared, mutable field storage plus a
/// reference-counted handle back to its class descriptor.
#[derive(Debug)]
pub struct Instance {
    pub class: Rc<ClassDef>,
    pub fields: RefCell<HashMap<String, Value>>,
}

impl Instance {
    pub fn new(class: Rc<ClassDef>) -> Self {
        Self {
            class,
            fields: RefCell::new(HashMap::new()),
        }
    }

    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().insert(name.into(), value);
    }
}

/// The Mython runtime value representation.
///
/// This is the type every expression ultimately evaluates to. Numbers are
/// fixed-width signed integers — Mython has no floating point. `Class` and
/// `Instance` are `Rc`-shared so a class descriptor can outlive every
/// `Assignment` that once held it, and so instances alias the way a
/// reference-semantics object model requires.
#[derive(Clone)]
pub enum Value {
    None,
    Number(i64),
    String(String),
    Bool(bool),
    Class(Rc<ClassDef>),
    Instance(Rc<Instance>),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Class(c) => write!(f, "Class({})", c.name),
            Value::Instance(i) => write!(f, "Instance({})", i.class.name),
        }
    }
}

impl Value {
    /// Stable type name, used in `TypeError`/`AttributeError` messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Bool(_) => "Bool",
            Value::Class(_) => "Class",
            Value::Instance(_) => "Instance",
        }
    }

    /// Mython truthiness: `None` is false, numbers are false only at zero,
    /// strings are false only when empty, `Bool` is itself, everything
    /// else (classes, instances) is always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Number(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Class(_) | Value::Instance(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Rc<Instance>> {
        match self {
            Value::Instance(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&Rc<ClassDef>> {
        match self {
            Value::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Identity/value equality used by `==`/`!=`. Instances compare by
    /// pointer identity; every other kind compares structurally. There is
    /// no implicit dispatch to a user `__eq__` — Mython has none.
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
