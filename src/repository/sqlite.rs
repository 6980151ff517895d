use super::MessageRepository;
use crate::{
    Error, Result,
    message::{Message, Page, PageRequest},
};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use libsql::{Builder, Connection, Database, Row};
use tracing::{debug, info};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, usuario, conteudo, data_criacao, gostei FROM mensagens";

/// libSQL-backed message store.
pub struct SqliteMessageRepository {
    _db: Database,
    conn: Connection,
}

impl SqliteMessageRepository {
    /// Opens (or creates) the database at `db_path`. `:memory:` keeps the data
    /// for the lifetime of this repository only.
    pub async fn new(db_path: &str) -> Result<Self> {
        let db = Builder::new_local(db_path).build().await?;
        // One shared connection so `:memory:` databases stay visible across calls.
        let conn = db.connect()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS mensagens (
                id TEXT PRIMARY KEY,
                usuario TEXT NOT NULL,
                conteudo TEXT NOT NULL,
                data_criacao TEXT NOT NULL,
                gostei INTEGER NOT NULL DEFAULT 0
            )
            "#,
            (),
        )
        .await?;

        info!("Database initialized successfully: {}", db_path);
        Ok(Self { _db: db, conn })
    }

    /// Total number of stored messages.
    pub async fn count(&self) -> Result<u64> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM mensagens", ()).await?;
        let total: i64 = match rows.next().await? {
            Some(row) => row.get(0)?,
            None => 0,
        };
        u64::try_from(total).map_err(|e| Error::internal(format!("Invalid row count: {e}")))
    }
}

fn row_to_message(row: &Row) -> Result<Message> {
    let id: String = row.get(0)?;
    let created_at_str: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)?.with_timezone(&Utc);
    let like_count: i64 = row.get(4)?;

    Ok(Message {
        id: Uuid::parse_str(&id)?,
        author: row.get(1)?,
        content: row.get(2)?,
        created_at,
        like_count: u32::try_from(like_count)
            .map_err(|e| Error::internal(format!("Invalid like count: {e}")))?,
    })
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let mut rows = self
            .conn
            .query(&format!("{SELECT_COLUMNS} WHERE id = ?"), [id.to_string()])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_message(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, message: Message) -> Result<Message> {
        self.conn
            .execute(
                r#"
                INSERT INTO mensagens (id, usuario, conteudo, data_criacao, gostei)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    usuario = excluded.usuario,
                    conteudo = excluded.conteudo,
                    gostei = excluded.gostei
                "#,
                (
                    message.id.to_string(),
                    message.author.as_str(),
                    message.content.as_str(),
                    message
                        .created_at
                        .to_rfc3339_opts(SecondsFormat::Micros, true),
                    i64::from(message.like_count),
                ),
            )
            .await?;

        debug!("Message saved to database: {}", message.id);
        Ok(message)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.conn
            .execute("DELETE FROM mensagens WHERE id = ?", [id.to_string()])
            .await?;
        debug!("Message deleted from database: {}", id);
        Ok(())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Message>> {
        let total_elements = self.count().await?;
        // SQLite offsets are signed 64-bit; anything past that is beyond every row.
        let Ok(offset) = i64::try_from(request.offset()) else {
            debug!("Page {} starts past the addressable range", request.page);
            return Ok(Page::new(Vec::new(), request, total_elements));
        };
        let mut rows = self
            .conn
            .query(
                &format!("{SELECT_COLUMNS} ORDER BY data_criacao ASC, rowid ASC LIMIT ? OFFSET ?"),
                (i64::from(request.size.get()), offset),
            )
            .await?;

        let mut content = Vec::new();
        while let Some(row) = rows.next().await? {
            content.push(row_to_message(&row)?);
        }

        debug!(
            "Retrieved {} messages from database for page {}",
            content.len(),
            request.page
        );
        Ok(Page::new(content, request, total_elements))
    }
}
