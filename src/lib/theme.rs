//! Shared Tailwind class constants to keep list and form styling consistent
//! across routes.

pub struct Theme;

impl Theme {
    /// Standard text input styling used by every form field.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Label styling paired with [`Theme::INPUT`].
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Card container for list items and detail panels.
    pub const CARD: &'static str = "rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800";

    /// Inline text link.
    pub const LINK: &'static str =
        "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell.
    pub const TD: &'static str =
        "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";
}
