/// Header and registry summary command.
pub mod info;
/// Variable listing command.
pub mod list;
/// Matrix value rendering helpers.
pub mod print;
/// Single variable inspection command.
pub mod show;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared command helpers.
pub mod util;
