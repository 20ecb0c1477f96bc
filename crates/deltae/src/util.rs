/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading the environment variable as a string, treating an empty
    /// string as absent.
    fn read_non_empty(&self, key: &str) -> Result<Option<String>, std::env::VarError> {
        match self.read(key) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;
    use std::ffi::OsString;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, OsString>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl Into<OsString>) -> &mut Self {
            self.bindings.insert(key.as_ref().to_owned(), value.into());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<OsString> {
            self.bindings.get(key).cloned()
        }
    }

    #[test]
    fn test_read_non_empty() {
        let env = &mut FakeEnv::new();
        assert_eq!(env.read_non_empty("KEY"), Ok(None), "unset is absent");
        env.set("KEY", " ");
        assert_eq!(env.read_non_empty("KEY"), Ok(None), "blank is absent");
        env.set("KEY", "value");
        assert_eq!(
            env.read_non_empty("KEY"),
            Ok(Some("value".to_owned())),
            "value is present"
        );
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
