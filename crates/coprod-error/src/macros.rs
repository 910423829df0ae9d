// Error handling macros
// Provides macros for simplified error handling

/// Create a new boxed error with a message in the given domain
#[macro_export]
macro_rules! make_error {
    ($domain:expr, $code:expr, $message:expr) => {
        $crate::IntoBoxError::into_box_error($crate::custom_error::CustomError::new(
            $domain, $code, $message,
        ))
    };
}

/// Return early with an error if a condition is not satisfied
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $domain:expr, $code:expr, $message:expr) => {
        if !($cond) {
            return Err($crate::make_error!($domain, $code, $message));
        }
    };
    ($cond:expr, $error:expr) => {
        if !($cond) {
            return Err(::core::convert::From::from($error));
        }
    };
}

/// Bail early with an error
#[macro_export]
macro_rules! bail {
    ($domain:expr, $code:expr, $message:expr) => {
        return Err($crate::make_error!($domain, $code, $message))
    };
    ($error:expr) => {
        return Err(::core::convert::From::from($error))
    };
}
