//! Template types for typed variable injection.

use std::marker::PhantomData;

/// A set of values substituted into a template's `__PLACEHOLDER__`s.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting(&'static str);

    impl TemplateVars for Greeting {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.0)
        }
    }

    #[test]
    fn test_render() {
        const HELLO: Template<Greeting> = Template::new("hello __NAME__, __NAME__");
        assert_eq!(HELLO.render(&Greeting("Jane")), "hello Jane, Jane");
    }
}
