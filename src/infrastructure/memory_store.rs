use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    data_layer::{DataLayer, DataLayerError},
    todo::{NewTodo, Todo, TodoUpdate},
};

// Vec rather than a map so list order stays insertion order.
#[derive(Clone, Default)]
pub struct InMemoryDataLayer {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryDataLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataLayer for InMemoryDataLayer {
    async fn list(&self) -> Result<Vec<Todo>, DataLayerError> {
        Ok(self.todos.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Todo, DataLayerError> {
        self.todos
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(DataLayerError::NotFound)
    }

    async fn add(&self, new: NewTodo) -> Result<Todo, DataLayerError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            order: new.order,
            completed: new.completed,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, update: TodoUpdate) -> Result<Todo, DataLayerError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Err(DataLayerError::NotFound);
        };
        if let Some(t) = update.title {
            todo.title = t;
        }
        if let Some(o) = update.order {
            todo.order = Some(o);
        }
        if let Some(c) = update.completed {
            todo.completed = c;
        }
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), DataLayerError> {
        let mut todos = self.todos.write().await;
        let Some(index) = todos.iter().position(|t| t.id == id) else {
            return Err(DataLayerError::NotFound);
        };
        todos.remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DataLayerError> {
        self.todos.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str, order: Option<i32>) -> NewTodo {
        NewTodo { title: title.to_string(), order, completed: false }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryDataLayer::new();
        let a = store.add(new_todo("a", None)).await.unwrap();
        let b = store.add(new_todo("b", Some(2))).await.unwrap();
        let c = store.add(new_todo("c", Some(1))).await.unwrap();

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn update_merges_only_given_fields() {
        let store = InMemoryDataLayer::new();
        let todo = store.add(new_todo("write report", Some(3))).await.unwrap();

        let updated = store
            .update(&todo.id, TodoUpdate { completed: Some(true), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.title, "write report");
        assert_eq!(updated.order, Some(3));
        assert!(updated.completed);

        let stored = store.get(&todo.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = InMemoryDataLayer::new();
        let err = store.update("nope", TodoUpdate::default()).await.unwrap_err();
        assert!(matches!(err, DataLayerError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_one_todo() {
        let store = InMemoryDataLayer::new();
        let keep = store.add(new_todo("keep", None)).await.unwrap();
        let gone = store.add(new_todo("gone", None)).await.unwrap();

        store.delete(&gone.id).await.unwrap();
        assert!(matches!(store.get(&gone.id).await.unwrap_err(), DataLayerError::NotFound));
        assert_eq!(store.list().await.unwrap(), vec![keep]);

        let err = store.delete(&gone.id).await.unwrap_err();
        assert!(matches!(err, DataLayerError::NotFound));
    }

    #[tokio::test]
    async fn delete_all_clears_the_collection() {
        let store = InMemoryDataLayer::new();
        store.add(new_todo("a", None)).await.unwrap();
        store.add(new_todo("b", None)).await.unwrap();

        store.delete_all().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        // Deleting an already-empty collection still succeeds
        store.delete_all().await.unwrap();
    }
}
