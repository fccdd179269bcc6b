use fpround_core::env::{AmbientRounding, Errno, FpEnv, FpFlags};
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub Env {}
    impl FpEnv for Env {
        fn rounding(&self) -> AmbientRounding;
        fn raise(&self, flags: FpFlags);
        fn set_errno(&self, errno: Errno);
    }
}

impl MockEnv {
    /// A mock with no expectations: any environment call fails the test.
    pub fn untouched() -> Self {
        Self::new()
    }

    /// Expects exactly one domain error report paired with one invalid raise.
    pub fn expecting_domain_error() -> Self {
        let mut env = Self::new();
        let _ = env
            .expect_set_errno()
            .with(eq(Errno::EDOM))
            .times(1)
            .return_const(());
        let _ = env
            .expect_raise()
            .with(eq(FpFlags::NV))
            .times(1)
            .return_const(());
        env
    }

    /// Expects exactly one raise of `flags` and nothing else.
    pub fn expecting_raise(flags: FpFlags) -> Self {
        let mut env = Self::new();
        let _ = env
            .expect_raise()
            .with(eq(flags))
            .times(1)
            .return_const(());
        env
    }

    /// Reports `mode` as the ambient direction any number of times.
    pub fn with_rounding(mode: AmbientRounding) -> Self {
        let mut env = Self::new();
        let _ = env.expect_rounding().return_const(mode);
        env
    }
}
