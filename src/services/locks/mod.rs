pub mod upload_lock;
