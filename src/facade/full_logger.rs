use super::format::{FormatProvider, InvariantFormat, format_composite, format_value};
use super::logger::Logger;
use super::type_tag::TypeTag;
use crate::domain::LogLevel;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Expands to the convenience family for one fixed level.
macro_rules! level_family {
    (
        $level:expr,
        enabled: $enabled:ident,
        plain: $plain:ident,
        for_source: $for_source:ident,
        for_type: $for_type:ident,
        args: $args:ident,
        args_for: $args_for:ident,
        with: $with:ident,
        value: $value:ident,
        value_with: $value_with:ident,
        caused_by: $caused_by:ident $(,)?
    ) => {
        #[doc = concat!("Whether `", stringify!($plain), "` writes currently reach the backend.")]
        fn $enabled(&self) -> bool {
            self.is_enabled($level)
        }

        fn $plain(&self, message: &str) {
            if self.is_enabled($level) {
                self.write(message, $level);
            }
        }

        fn $for_source(&self, source: TypeTag, message: &str) {
            if self.is_enabled($level) {
                self.write_for(message, source, $level);
            }
        }

        fn $for_type<T: ?Sized>(&self, message: &str)
        where
            Self: Sized,
        {
            if self.is_enabled($level) {
                self.write_for(message, TypeTag::of::<T>(), $level);
            }
        }

        fn $args(&self, template: &str, args: &[&dyn fmt::Display]) {
            self.write_template(&InvariantFormat, template, args, None, $level);
        }

        fn $args_for(&self, source: TypeTag, template: &str, args: &[&dyn fmt::Display]) {
            self.write_template(&InvariantFormat, template, args, Some(source), $level);
        }

        fn $with(&self, provider: &dyn FormatProvider, template: &str, args: &[&dyn fmt::Display]) {
            self.write_template(provider, template, args, None, $level);
        }

        fn $value(&self, value: &dyn fmt::Display) {
            if self.is_enabled($level) {
                self.write(&value.to_string(), $level);
            }
        }

        fn $value_with(&self, provider: &dyn FormatProvider, value: &dyn fmt::Display) {
            if self.is_enabled($level) {
                self.write(&format_value(provider, value), $level);
            }
        }

        fn $caused_by(&self, message: &str, error: &(dyn Error + 'static)) {
            if self.is_enabled($level) {
                self.write_error(error, message, $level);
            }
        }
    };
}

/// [`Logger`] with per-level convenience operations.
///
/// Every method is a fixed-level specialization of the `Logger` write
/// contract: the same level guard applies and formatting is skipped entirely
/// for dropped writes.
pub trait FullLogger: Logger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Composite-format `template` and write it, optionally on behalf of `source`.
    ///
    /// A template that fails to format is forwarded verbatim.
    fn write_template(
        &self,
        provider: &dyn FormatProvider,
        template: &str,
        args: &[&dyn fmt::Display],
        source: Option<TypeTag>,
        level: LogLevel,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let message = match format_composite(provider, template, args) {
            Ok(message) => Cow::Owned(message),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    template,
                    "Message template could not be formatted, forwarding it verbatim"
                );
                Cow::Borrowed(template)
            }
        };

        match source {
            Some(source) => self.write_for(&message, source, level),
            None => self.write(&message, level),
        }
    }

    level_family!(
        LogLevel::Debug,
        enabled: is_debug_enabled,
        plain: debug,
        for_source: debug_for,
        for_type: debug_for_type,
        args: debug_args,
        args_for: debug_args_for,
        with: debug_with,
        value: debug_value,
        value_with: debug_value_with,
        caused_by: debug_caused_by,
    );

    level_family!(
        LogLevel::Info,
        enabled: is_info_enabled,
        plain: info,
        for_source: info_for,
        for_type: info_for_type,
        args: info_args,
        args_for: info_args_for,
        with: info_with,
        value: info_value,
        value_with: info_value_with,
        caused_by: info_caused_by,
    );

    level_family!(
        LogLevel::Warn,
        enabled: is_warn_enabled,
        plain: warn,
        for_source: warn_for,
        for_type: warn_for_type,
        args: warn_args,
        args_for: warn_args_for,
        with: warn_with,
        value: warn_value,
        value_with: warn_value_with,
        caused_by: warn_caused_by,
    );

    level_family!(
        LogLevel::Error,
        enabled: is_error_enabled,
        plain: error,
        for_source: error_for,
        for_type: error_for_type,
        args: error_args,
        args_for: error_args_for,
        with: error_with,
        value: error_value,
        value_with: error_value_with,
        caused_by: error_caused_by,
    );

    level_family!(
        LogLevel::Fatal,
        enabled: is_fatal_enabled,
        plain: fatal,
        for_source: fatal_for,
        for_type: fatal_for_type,
        args: fatal_args,
        args_for: fatal_args_for,
        with: fatal_with,
        value: fatal_value,
        value_with: fatal_value_with,
        caused_by: fatal_caused_by,
    );
}
