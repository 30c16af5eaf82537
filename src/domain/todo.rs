#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub order: Option<i32>,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub order: Option<i32>,
    pub completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub order: Option<i32>,
    pub completed: Option<bool>,
}
