#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // id
    TaskCompleted,
    TaskDeleted,
    TaskNotFoundWithId(String),
    InvalidTask(String), // validation error
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === LISTING MESSAGES ===
    TasksHeader,
    TasksByPriorityHeader(u8),
    TasksByCategoryHeader(String),
    SearchResultsHeader(String),
    NoTasksFound,
    NoTasksWithPriority(u8),
    NoTasksWithCategory(String),
    NoSearchResults(String),
    TaskCount(usize),

    // === CATEGORY MESSAGES ===
    CategoryAdded(String),
    CategoryRemoved(String),
    CategoryAlreadyPresent(String),
    CategoryNotOnTask(String),
    CategoriesHeader,
    NoCategoriesFound,

    // === STORE MESSAGES ===
    StoreCorrupt(String),
    StoreLoaded(usize, String), // count, path
    StoreMissing(String),       // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    PromptStorageFile,

    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddTask,
    MenuViewAll,
    MenuViewByPriority,
    MenuViewByCategory,
    MenuMarkCompleted,
    MenuDeleteTask,
    MenuSearch,
    MenuExit,
    PromptMenuChoice,
    SavingAndExiting,
    Goodbye,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptDueDate,
    PromptCategories,
    PromptTaskId,
    PromptCategory,
    PromptSearchQuery,
    PriorityRange,
}
