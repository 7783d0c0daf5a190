//! Shared fixtures for the micro-request benchmarks.

/// A raw request head loaded from `resources/request`.
#[derive(Debug, Copy, Clone)]
pub struct RequestFixture {
    name: &'static str,
    size: FixtureSize,
    content: &'static str,
}

impl RequestFixture {
    pub const fn new(name: &'static str, size: FixtureSize, content: &'static str) -> Self {
        Self { name, size, content }
    }

    pub const fn small(name: &'static str, content: &'static str) -> Self {
        Self::new(name, FixtureSize::Small, content)
    }

    pub const fn large(name: &'static str, content: &'static str) -> Self {
        Self::new(name, FixtureSize::Large, content)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> FixtureSize {
        self.size
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    /// Byte length of the head, used as criterion throughput.
    pub fn len(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureSize {
    Small,
    Large,
}

pub static SMALL_HEAD: RequestFixture = RequestFixture::small("get_small", include_str!("../resources/request/get_small.txt"));
pub static LARGE_HEAD: RequestFixture = RequestFixture::large("get_large", include_str!("../resources/request/get_large.txt"));

pub fn fixtures() -> [RequestFixture; 2] {
    [SMALL_HEAD, LARGE_HEAD]
}
