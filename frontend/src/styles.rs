pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const SPIN_BUTTON: &str = "px-6 py-3 rounded-full font-bold text-white bg-gradient-to-r from-yellow-400 to-orange-500 shadow-lg transform transition-all duration-300";
pub const BUTTON_DANGER: &str = "px-6 py-3 rounded-full font-bold text-white bg-red-600 hover:bg-red-700 shadow-lg transform transition-all duration-300";
pub const NOT_FOUND: &str = "flex min-h-[80vh] flex-col items-center justify-center text-gray-600 dark:text-gray-300";
