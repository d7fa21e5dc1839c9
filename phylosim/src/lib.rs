#[cfg(feature = "core")]
#[doc(inline)]
pub use phylosim_core as core;

#[cfg(feature = "trunk")]
#[doc(inline)]
pub use phylosim_trunk as trunk;
