/// Crate-wide result: every module's error enum converts into it with `?`
pub type Result<T = ()> = anyhow::Result<T>;
