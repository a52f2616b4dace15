/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:     classes.rs
 * Purpose:  Class descriptor construction, instance construction, and
 *           method dispatch.
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

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::ast::ClassDecl;
use crate::environment::Environment;
use crate::error::MythonError;
use crate::span::Span;
use crate::value::{ClassDef, Instance, MethodDef, Value};

use super::statements::{self, ExecSignal};

/// Builds a `ClassDef` from a parsed declaration. The parent, if named, must
/// already be bound to a `Class` value — Mython has no forward references
/// across class declarations, classes are defined top to bottom.
pub fn build_class(decl: &ClassDecl, env: &Environment) -> Result<Rc<ClassDef>, MythonError> {
    let parent = match &decl.parent {
        Some(name) => match env.get(name) {
            Some(Value::Class(c)) => Some(c),
            Some(other) => {
                return Err(MythonError::type_error(
                    format!("'{}' is not a class and cannot be inherited from", other.type_name()),
                    decl.span,
                ))
            }
            None => return Err(MythonError::name(name.clone(), decl.span)),
        },
        None => None,
    };

    let mut methods = HashMap::new();
    for m in &decl.methods {
        methods.insert(
            m.name.clone(),
            MethodDef {
                name: m.name.clone(),
                params: m.params.clone(),
                body: Rc::new(m.body.clone()),
            },
        );
    }

    Ok(Rc::new(ClassDef {
        name: decl.name.clone(),
        methods,
        parent,
    }))
}

/// Evaluates `ClassName(args)` as construction: allocates a fresh instance
/// and, if the class (or an ancestor) defines `__init__`, runs it for
/// side effects. `__init__`'s return value is always discarded.
///
/// A class with no `__init__` anywhere in its parent chain behaves as if it
/// had a synthesized zero-argument one — construction with arguments against
/// such a class is a `MethodNotFound`, matching the "no matching init"
/// overload-resolution error every other arity mismatch produces.
pub fn construct_instance<W: Write>(
    class: &Rc<ClassDef>,
    args: Vec<Value>,
    span: Span,
    output: &mut W,
) -> Result<Value, MythonError> {
    let instance = Rc::new(Instance::new(class.clone()));

    match class.get_method("__init__") {
        Some(init) => {
            call_method(&instance, init, &class.name, args, span, output)?;
        }
        None if args.is_empty() => {}
        None => {
            return Err(MythonError::method_not_found(
                class.name.clone(),
                "__init__",
                args.len(),
                span,
            ))
        }
    }

    Ok(Value::Instance(instance))
}

/// Dispatches a bound method call: checks arity, binds `self` plus the
/// arguments into a fresh frame, runs the body, and unwraps any `return`.
/// A method that falls off the end of its body without an explicit `return`
/// evaluates to `None`, same as `__init__`.
pub fn call_method<W: Write>(
    instance: &Rc<Instance>,
    method: &MethodDef,
    owner_class_name: &str,
    args: Vec<Value>,
    span: Span,
    output: &mut W,
) -> Result<Value, MythonError> {
    if args.len() != method.params.len() {
        // `__str__` is special-cased: an arity mismatch (almost always a
        // declared `__str__` that takes parameters) falls back to the
        // identity surrogate rather than failing the whole stringify.
        if method.name == "__str__" {
            return Ok(Value::String(identity_surrogate(instance)));
        }
        return Err(MythonError::method_not_found(
            owner_class_name.to_string(),
            method.name.clone(),
            args.len(),
            span,
        ));
    }

    let mut frame = Environment::new();
    frame.define("self", Value::Instance(instance.clone()));
    for (param, arg) in method.params.iter().zip(args) {
        frame.define(param.clone(), arg);
    }

    match statements::exec_block(&method.body, &mut frame, output)? {
        ExecSignal::Return(value) => Ok(value),
        ExecSignal::None => Ok(Value::None),
    }
}

/// Resolves a dotted identifier chain: the first segment against the
/// environment, every subsequent segment as a field read on the instance
/// the previous segment evaluated to. This is `spec.md`'s VariableValue
/// algorithm — fields only ever live on instances, so any non-instance
/// value mid-chain makes the next segment an `AttributeError`.
pub fn resolve_path(path: &[String], env: &Environment, span: Span) -> Result<Value, MythonError> {
    let mut current = env
        .get(&path[0])
        .ok_or_else(|| MythonError::name(path[0].clone(), span))?;

    for segment in &path[1..] {
        current = match &current {
            Value::Instance(inst) => inst
                .get_field(segment)
                .ok_or_else(|| MythonError::attribute(inst.class.name.clone(), segment.clone(), span))?,
            other => return Err(MythonError::attribute(other.type_name(), segment.clone(), span)),
        };
    }

    Ok(current)
}

/// The opaque, non-empty "no `__str__`" fallback text: a class name plus the
/// hex address of the instance's heap allocation. Not guaranteed stable
/// across runs — only that it is a parseable, non-empty string.
pub fn identity_surrogate(instance: &Rc<Instance>) -> String {
    format!("<{} object at {:#x}>", instance.class.name, Rc::as_ptr(instance) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn leaf_class(name: &str) -> Rc<ClassDef> {
        Rc::new(ClassDef {
            name: name.to_string(),
            methods: HashMap::new(),
            parent: None,
        })
    }

    #[test]
    fn identity_surrogate_carries_the_class_name_and_is_non_empty() {
        let instance = Rc::new(Instance::new(leaf_class("Widget")));
        let text = identity_surrogate(&instance);
        assert!(text.starts_with("<Widget object at 0x"));
        assert!(text.ends_with('>'));
    }

    #[test]
    fn call_method_falls_back_on_str_arity_mismatch_but_not_others() {
        let class = leaf_class("Thing");
        let instance = Rc::new(Instance::new(class.clone()));
        let mut output = Vec::new();

        let str_method = MethodDef { name: "__str__".to_string(), params: vec!["extra".to_string()], body: Rc::new(vec![]) };
        let result = call_method(&instance, &str_method, &class.name, Vec::new(), Span::unknown(), &mut output).unwrap();
        assert!(matches!(result, Value::String(s) if s.starts_with("<Thing object at 0x")));

        let other_method = MethodDef { name: "greet".to_string(), params: vec!["extra".to_string()], body: Rc::new(vec![]) };
        let err = call_method(&instance, &other_method, &class.name, Vec::new(), Span::unknown(), &mut output).unwrap_err();
        assert_eq!(err.code(), "E_METHOD");
    }

    #[test]
    fn get_method_walks_the_parent_chain() {
        let parent = leaf_class("Base");
        let mut methods = HashMap::new();
        methods.insert(
            "greet".to_string(),
            MethodDef { name: "greet".to_string(), params: vec![], body: Rc::new(vec![]) },
        );
        let parent = Rc::new(ClassDef { name: "Base".to_string(), methods, parent: None });
        let child = Rc::new(ClassDef { name: "Child".to_string(), methods: HashMap::new(), parent: Some(parent) });

        assert!(child.get_method("greet").is_some());
        assert!(child.is_subclass_of("Base"));
        assert!(child.get_method("missing").is_none());
    }
}
