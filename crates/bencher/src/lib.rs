#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    header: &'static str,
    fields: TestFields,
}

impl TestCase {
    pub const fn new(name: &'static str, header: &'static str, fields: TestFields) -> Self {
        Self { name, header, fields }
    }

    pub const fn list(name: &'static str, header: &'static str, list: &'static str) -> Self {
        Self::new(name, header, TestFields::List(list))
    }

    pub const fn names(name: &'static str, header: &'static str, names: &'static [&'static str]) -> Self {
        Self::new(name, header, TestFields::Names(names))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn fields(&self) -> TestFields {
        self.fields
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestFields {
    List(&'static str),
    Names(&'static [&'static str]),
}
