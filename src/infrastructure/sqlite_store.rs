use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{
    Pool, Row, Sqlite,
    sqlite::{SqlitePoolOptions, SqliteRow},
};
use uuid::Uuid;

use crate::domain::{
    data_layer::{DataLayer, DataLayerError},
    todo::{NewTodo, Todo, TodoUpdate},
};

#[derive(Clone)]
pub struct SqliteDataLayer {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteDataLayer {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn init(&self) -> Result<()> {
        // "order" is an SQL keyword, hence item_order
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                item_order INTEGER,
                completed INTEGER NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl DataLayer for SqliteDataLayer {
    async fn list(&self) -> Result<Vec<Todo>, DataLayerError> {
        let rows = sqlx::query("SELECT id, title, item_order, completed FROM todos ORDER BY rowid")
            .fetch_all(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn get(&self, id: &str) -> Result<Todo, DataLayerError> {
        let row = sqlx::query("SELECT id, title, item_order, completed FROM todos WHERE id = ?1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;
        row.map(row_to_todo).ok_or(DataLayerError::NotFound)
    }

    async fn add(&self, new: NewTodo) -> Result<Todo, DataLayerError> {
        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO todos (id, title, item_order, completed) VALUES (?1, ?2, ?3, ?4)")
            .bind(&id)
            .bind(&new.title)
            .bind(new.order)
            .bind(new.completed)
            .execute(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;
        Ok(Todo { id, title: new.title, order: new.order, completed: new.completed })
    }

    async fn update(&self, id: &str, update: TodoUpdate) -> Result<Todo, DataLayerError> {
        // Fetch existing, merge, write back
        let mut todo = self.get(id).await?;
        if let Some(t) = update.title {
            todo.title = t;
        }
        if let Some(o) = update.order {
            todo.order = Some(o);
        }
        if let Some(c) = update.completed {
            todo.completed = c;
        }

        sqlx::query("UPDATE todos SET title = ?2, item_order = ?3, completed = ?4 WHERE id = ?1")
            .bind(&todo.id)
            .bind(&todo.title)
            .bind(todo.order)
            .bind(todo.completed)
            .execute(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;

        Ok(todo)
    }

    async fn delete(&self, id: &str) -> Result<(), DataLayerError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;
        if result.rows_affected() == 0 {
            return Err(DataLayerError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DataLayerError> {
        sqlx::query("DELETE FROM todos")
            .execute(&*self.pool)
            .await
            .map_err(DataLayerError::internal)?;
        Ok(())
    }
}

fn row_to_todo(row: SqliteRow) -> Todo {
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        order: row.get("item_order"),
        completed: row.get("completed"),
    }
}
