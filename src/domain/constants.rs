pub const HEADER_START_TAG: &str = ">>>HEADER_START<<<";
pub const HEADER_END_TAG: &str = ">>>HEADER_END<<<";
pub const FOOTER_START_TAG: &str = ">>>FOOTER_START<<<";
pub const FOOTER_END_TAG: &str = ">>>FOOTER_END<<<";

pub const FILE_NAME_TAG: &str = "{FILE_NAME}";
pub const FOLDER_NAME_TAG: &str = "{FOLDER_NAME}";

pub const NO_HEADER_OR_FOOTER_MESSAGE: &str =
    "No header nor footer given from either command line arguments or file.";
