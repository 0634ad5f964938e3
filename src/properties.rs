/// [`LogEvent`](crate::event::LogEvent) property names that are significant
/// for [`BuildLogSink`](crate::sink::BuildLogSink) and give the build host
/// additional information when specified.
///
/// All are optional. Producers populate these by exact name; anything else in
/// the property bag is ignored by the sink.
pub struct BuildProperties;

impl BuildProperties {
    /// The message's subcategory.
    pub const SUBCATEGORY: &'static str = "Subcategory";

    /// The message's error or warning code.
    pub const MESSAGE_CODE: &'static str = "MessageCode";

    /// The help keyword for the host IDE.
    pub const HELP_KEYWORD: &'static str = "HelpKeyword";

    /// The path to the file causing the message.
    pub const FILE: &'static str = "File";

    /// The line in the file causing the message.
    pub const LINE_NUMBER: &'static str = "LineNumber";

    /// The column in the file causing the message.
    pub const COLUMN_NUMBER: &'static str = "ColumnNumber";

    /// The last line of a range of lines in the file causing the message.
    pub const END_LINE_NUMBER: &'static str = "EndLineNumber";

    /// The last column of a range of columns in the file causing the message.
    pub const END_COLUMN_NUMBER: &'static str = "EndColumnNumber";

    /// Every recognized property name, in extraction order.
    pub const ALL: [&'static str; 8] = [
        Self::SUBCATEGORY,
        Self::MESSAGE_CODE,
        Self::HELP_KEYWORD,
        Self::FILE,
        Self::LINE_NUMBER,
        Self::COLUMN_NUMBER,
        Self::END_LINE_NUMBER,
        Self::END_COLUMN_NUMBER,
    ];
}
