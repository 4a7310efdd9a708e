use std::borrow::Cow;

use kstring::KString;

// FUTURE: figure out how to inherit from `From` (and keep all the
// existing From definitions for KString). It doesn't work out of the
// box (various errors).
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

// Can't do KString::from_static: no way to have a separate trait impl
// for &'static.
impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&&str> for KString {
    fn myfrom(s: &&str) -> Self {
        KString::from_ref(*s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}

impl<'t> MyFrom<Cow<'t, str>> for KString {
    fn myfrom(s: Cow<'t, str>) -> Self {
        match s {
            Cow::Borrowed(s) => KString::from_ref(s),
            Cow::Owned(s) => KString::from_string(s),
        }
    }
}

// Numbers as attribute values, e.g. `att("tabindex", 3)`.
macro_rules! myfrom_number {
    ($($t:ty),*) => {
        $(
            impl MyFrom<$t> for KString {
                fn myfrom(val: $t) -> Self {
                    KString::from_string(val.to_string())
                }
            }
        )*
    }
}

myfrom_number!(usize, u32, u64, i32, i64);
