use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),                   // id
    TaskCompleted(i64),                 // id
    TaskReopened(i64),                  // id
    TaskDeleted(i64),                   // id
    TaskUpdatedWithName(String),        // description
    TaskNotFoundWithId(i64),            // id
    TaskDescriptionEmpty,
    TaskSkippedNoChanges(i64),          // id
    TasksHeader,
    TasksPendingHeader,
    TasksCompletedHeader,
    NoTasksFound,
    TasksCleared(usize),                // removed count
    TasksImported(usize, PathBuf),      // count, source file
    TasksSummary { total: usize, completed: usize },
    ConfirmDeleteTask(String),          // description
    ConfirmClearCompleted(usize),       // completed count
    ConfirmReplaceTasks(usize),         // existing count
    NoCompletedTasks,

    // === STORE MESSAGES ===
    TasksFilePath(PathBuf),
    NextTaskId(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(PathBuf),
    ConfigModuleStorage,

    // === PROMPTS ===
    PromptTaskDescription,
    PromptTasksFile,

    // === GENERAL MESSAGES ===
    OperationCompleted,
    OperationCancelled,
    CommandFailed(String), // error chain
}
